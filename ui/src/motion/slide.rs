use super::easing::ease_in_out;
use std::time::Duration;

/// Value that glides between hidden (0.0) and shown (1.0) at a fixed speed.
///
/// Changing the target mid-way turns around from the current position.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    value: f32,
    target: f32,
    duration: Duration,
}

impl Slide {
    pub fn shown(duration: Duration) -> Self {
        Self {
            value: 1.0,
            target: 1.0,
            duration,
        }
    }

    pub fn show(&mut self, shown: bool) {
        self.target = if shown { 1.0 } else { 0.0 };
        if self.duration.is_zero() {
            self.value = self.target;
        }
    }

    pub fn is_moving(&self) -> bool {
        (self.value - self.target).abs() > f32::EPSILON
    }

    /// Returns true while the value changes.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_moving() {
            return false;
        }
        let step = if self.duration.is_zero() {
            1.0
        } else {
            (dt.as_secs_f64() / self.duration.as_secs_f64()) as f32
        };
        self.value = if self.target > self.value {
            (self.value + step).min(self.target)
        } else {
            (self.value - step).max(self.target)
        };
        true
    }

    pub fn value(&self) -> f32 {
        ease_in_out(self.value)
    }

    /// Visible part of something `rows` tall.
    pub fn rows(&self, rows: u16) -> u16 {
        (self.value() * f32::from(rows)).round() as u16
    }
}
