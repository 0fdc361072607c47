//! Easing curves mapping normalized time to normalized progress.

/// Maps `t` in [0, 1] to progress in [0, 1].
pub type EasingFn = fn(f32) -> f32;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-out, the reveal curve.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolate between two values.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [linear as EasingFn, ease_in_out, ease_out_cubic] {
            assert_eq!(easing(0.0), 0.0);
            assert_eq!(easing(1.0), 1.0);
            assert_eq!(easing(-3.0), 0.0);
            assert_eq!(easing(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(ease_out_cubic(0.25) > 0.5);
        assert!((ease_in_out(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
