// Core components
pub mod common;

// Reusable patterns and utilities
pub mod base_popup;

// Input components
pub mod contact_form;
pub mod global_key_watcher;
pub mod page_navigator;

// Display components
pub mod help_bar;
pub mod navbar;
pub mod toast;
