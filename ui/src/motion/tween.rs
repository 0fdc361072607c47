use super::easing::{EasingFn, linear};
use std::time::Duration;

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    fn tick(&mut self, dt: Duration);

    fn is_complete(&self) -> bool;

    /// Current eased output.
    fn value(&self) -> f32;

    fn reset(&mut self);
}

/// Progress from 0.0 to 1.0 over a duration, after an optional delay.
///
/// Elapsed time is kept as a [`Duration`] so long runs do not drift.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    elapsed: Duration,
    delay: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            delay: Duration::ZERO,
            duration,
            easing: linear,
        }
    }

    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Jump straight to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.delay + self.duration;
    }

    /// Linear progress before easing.
    pub fn raw_progress(&self) -> f32 {
        let running = self.elapsed.saturating_sub(self.delay);
        if self.duration.is_zero() {
            return if self.elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        let t = running.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::ease_out_cubic;

    #[test]
    fn test_delay_holds_value_at_zero() {
        let mut tween = Tween::new(Duration::from_millis(100)).delay(Duration::from_millis(50));
        tween.tick(Duration::from_millis(50));
        assert_eq!(tween.value(), 0.0);
        tween.tick(Duration::from_millis(50));
        assert!((tween.value() - 0.5).abs() < 1e-6);
        tween.tick(Duration::from_millis(60));
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut tween = Tween::new(Duration::ZERO).easing(ease_out_cubic);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 1.0);
        tween.reset();
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_finish_and_reset() {
        let mut tween = Tween::new(Duration::from_secs(1));
        tween.finish();
        assert!(tween.is_complete());
        tween.reset();
        assert_eq!(tween.value(), 0.0);
    }
}
