//! Time-stepped animation primitives driven by the tick event.
//!
//! Nothing in here reads a clock: callers pass the elapsed time of each frame,
//! which keeps every animation deterministic under test.

pub mod counter;
pub mod easing;
pub mod pulse;
pub mod reveal;
pub mod slide;
pub mod tween;

pub use counter::{CounterState, SkillCounter, SkillCounters};
pub use easing::{EasingFn, ease_in_out, ease_out_cubic, lerp, linear};
pub use pulse::SettlePulse;
pub use reveal::{ElementFrame, PlaybackState, RevealEngine, RevealSpec, RevealTimeline};
pub use slide::Slide;
pub use tween::{Animation, Tween};
