use serde::Deserialize;
use std::time::Duration;

/// Timing of every animation on the page.
///
/// Durations are in milliseconds in the file; accessors hand out [`Duration`]s.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AnimationConfig {
    enabled: Option<bool>,
    reveal_duration_ms: Option<u64>,
    stagger_ms: Option<u64>,
    offset_rows: Option<u16>,
    card_duration_ms: Option<u64>,
    hero_char_stagger_ms: Option<u64>,
    hero_duration_ms: Option<u64>,
    hero_delay_ms: Option<u64>,
    experience_stagger_ms: Option<u64>,
    experience_duration_ms: Option<u64>,
    timeline_line_ms: Option<u64>,
    entrance_delay_ms: Option<u64>,
    entrance_duration_ms: Option<u64>,
    settle_duration_ms: Option<u64>,
    navbar_slide_ms: Option<u64>,
    counter_step_ms: Option<u64>,
}

fn millis(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default))
}

impl AnimationConfig {
    /// A copy with every animation switched off (`--no-animations`).
    pub fn disabled(&self) -> Self {
        Self {
            enabled: Some(false),
            ..self.clone()
        }
    }

    /// When false every animation completes on its first frame.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn reveal_duration(&self) -> Duration {
        millis(self.reveal_duration_ms, 1000)
    }

    pub fn stagger(&self) -> Duration {
        millis(self.stagger_ms, 100)
    }

    /// Rows an element travels while it is revealed.
    pub fn offset_rows(&self) -> u16 {
        self.offset_rows.unwrap_or(3)
    }

    pub fn card_duration(&self) -> Duration {
        millis(self.card_duration_ms, 600)
    }

    pub fn hero_char_stagger(&self) -> Duration {
        millis(self.hero_char_stagger_ms, 50)
    }

    pub fn hero_duration(&self) -> Duration {
        millis(self.hero_duration_ms, 800)
    }

    pub fn hero_delay(&self) -> Duration {
        millis(self.hero_delay_ms, 200)
    }

    pub fn experience_stagger(&self) -> Duration {
        millis(self.experience_stagger_ms, 300)
    }

    pub fn experience_duration(&self) -> Duration {
        millis(self.experience_duration_ms, 800)
    }

    pub fn timeline_line(&self) -> Duration {
        millis(self.timeline_line_ms, 1500)
    }

    pub fn entrance_delay(&self) -> Duration {
        millis(self.entrance_delay_ms, 200)
    }

    pub fn entrance_duration(&self) -> Duration {
        millis(self.entrance_duration_ms, 600)
    }

    pub fn settle_duration(&self) -> Duration {
        millis(self.settle_duration_ms, 800)
    }

    pub fn navbar_slide(&self) -> Duration {
        millis(self.navbar_slide_ms, 250)
    }

    /// Interval between two skill counter increments.
    pub fn counter_step(&self) -> Duration {
        millis(self.counter_step_ms, 15).max(Duration::from_millis(1))
    }
}
