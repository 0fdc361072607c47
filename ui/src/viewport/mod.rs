//! Scroll position, viewport intersection and active-section tracking.

pub mod active;
pub mod observer;
pub mod scroll;

pub use active::ActiveSectionTracker;
pub use observer::{ObserveMode, ObserverEntry, Span, Trigger, ViewportRect, VisibilityObserver};
pub use scroll::{ScrollDirection, ScrollTracker};
