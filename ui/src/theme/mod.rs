//! # Theme
//!
//! Light/dark preference handling for the portfolio.
//!
//! - [`ThemeState`] - current preference and palette, owned by the model
//! - [`ThemeLoader`] - built-in or user supplied palette files
//! - [`PreferenceStore`] - the persisted `theme = "..."` entry
//! - [`system`] - terminal colour scheme detection (`COLORFGBG`)
//!
//! The starting theme is the stored preference, then the terminal's, then light.

pub mod loader;
pub mod state;
pub mod store;
pub mod system;
pub mod types;
pub mod validation;

pub use loader::ThemeLoader;
pub use state::{PreferenceSource, ThemeState, resolve_initial};
pub use store::{PreferenceError, PreferenceStore};
pub use types::{Palette, ThemeColors, ThemeConfig, ThemeFile, ThemePreference};
