//! # Application Module
//!
//! Event loop side of the portfolio: the tui-realm model, message handling
//! and drawing.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - tui-realm application, terminal and the [`page::PageState`]
//! - **View** - draws the page, navbar, toasts, contact popup and help bar
//! - **Updates** - one handler per message family
//!
//! ## Core Components
//!
//! - [`application_lifecycle`] - Startup, main loop and shutdown
//! - [`model`] - Application model and component focus
//! - [`page`] - Headless page state, usable without a terminal
//! - [`task_manager`] - Background work on the task pool
//! - [`view`] - Rendering and screen layout

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Core application model
pub mod model;
/// Headless page state
pub mod page;
/// Background task management and coordination
pub mod task_manager;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
