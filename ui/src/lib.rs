//! # Folio UI Library
//!
//! A developer portfolio rendered as a scrolling terminal page, built with
//! Ratatui and tui-realm.
//!
//! ## Features
//!
//! - Sections revealed with staggered animations as they scroll into view
//! - Navbar tracking the active section, smooth jumps between sections
//! - Light and dark palettes with a persisted preference
//! - Contact form delivering messages through an email service
//!
//! ## Modules
//!
//! - [`app`] - Main application logic and the headless page state
//! - [`components`] - tui-realm components and chrome renderers
//! - [`config`] - Layered configuration and command line flags
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`motion`] - Easing, tweens and the reveal engine
//! - [`sections`] - Portfolio sections and page layout
//! - [`theme`] - Palettes and the theme preference
//! - [`viewport`] - Scroll tracking and visibility observers
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod motion;
pub mod sections;
pub mod theme;
pub mod viewport;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;
