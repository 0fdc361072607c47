use super::easing::{ease_in_out, lerp};
use super::reveal::ElementFrame;
use super::tween::{Animation, Tween};
use std::time::Duration;

const OFFSET_KEYFRAMES: [f32; 3] = [0.0, 1.0, 0.0];
const OPACITY_KEYFRAMES: [f32; 3] = [1.0, 0.5, 1.0];

/// Short dip-and-return played on the contact panel after a message is sent.
///
/// Each half of the keyframe track is eased separately.
#[derive(Debug, Clone, Default)]
pub struct SettlePulse {
    tween: Option<Tween>,
}

impl SettlePulse {
    pub fn trigger(&mut self, duration: Duration) {
        self.tween = Some(Tween::new(duration));
    }

    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.tick(dt);
        if tween.is_complete() {
            self.tween = None;
        }
        true
    }

    pub fn frame(&self) -> ElementFrame {
        let Some(tween) = &self.tween else {
            return ElementFrame::SHOWN;
        };

        let progress = tween.raw_progress();
        let (segment, local) = if progress < 0.5 {
            (0, progress * 2.0)
        } else {
            (1, (progress - 0.5) * 2.0)
        };
        let t = ease_in_out(local);

        ElementFrame {
            opacity: lerp(OPACITY_KEYFRAMES[segment], OPACITY_KEYFRAMES[segment + 1], t),
            offset_rows: lerp(OFFSET_KEYFRAMES[segment], OFFSET_KEYFRAMES[segment + 1], t),
        }
    }
}
