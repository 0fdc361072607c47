//! Staggered, reversible reveal timelines.
//!
//! Each group of elements shares one playhead. Element `i` starts
//! `i * stagger` after the first and runs for `duration`, so the group takes
//! `duration + stagger * (n - 1)` end to end. Reversing moves the playhead
//! backwards from wherever it is, which replays the exact inverse (the last
//! element leaves first) without jumping.

use super::easing::{EasingFn, ease_out_cubic};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

/// Where a group is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Registered, never triggered
    Pending,
    PlayingIn,
    Shown,
    PlayingOut,
    /// Fully reversed
    Hidden,
}

/// Opacity and downward shift of one element for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    pub opacity: f32,
    pub offset_rows: f32,
}

impl ElementFrame {
    pub const SHOWN: ElementFrame = ElementFrame {
        opacity: 1.0,
        offset_rows: 0.0,
    };

    /// Rows to push the element down, rounded to whole terminal rows.
    pub fn shift(&self) -> u16 {
        self.offset_rows.max(0.0).round() as u16
    }
}

/// Timing of one reveal group.
#[derive(Debug, Clone, Copy)]
pub struct RevealSpec {
    pub count: usize,
    pub duration: Duration,
    pub stagger: Duration,
    pub delay: Duration,
    pub offset_rows: f32,
    pub easing: EasingFn,
}

impl RevealSpec {
    pub fn new(count: usize, duration: Duration, stagger: Duration, offset_rows: f32) -> Self {
        Self {
            count,
            duration,
            stagger,
            delay: Duration::ZERO,
            offset_rows,
            easing: ease_out_cubic,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Playhead length from first element start to last element end.
    pub fn total(&self) -> Duration {
        let spread = self
            .stagger
            .saturating_mul(self.count.saturating_sub(1) as u32);
        self.delay + spread + self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One group's playhead.
#[derive(Debug, Clone)]
pub struct RevealTimeline {
    spec: RevealSpec,
    playhead: Duration,
    direction: Option<Direction>,
    state: PlaybackState,
}

impl RevealTimeline {
    pub fn new(spec: RevealSpec) -> Self {
        Self {
            spec,
            playhead: Duration::ZERO,
            direction: None,
            state: PlaybackState::Pending,
        }
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn playhead(&self) -> Duration {
        self.playhead
    }

    pub fn is_animating(&self) -> bool {
        self.direction.is_some()
    }

    /// Play towards fully shown, from the current position.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Shown {
            return;
        }
        self.direction = Some(Direction::Forward);
        self.state = PlaybackState::PlayingIn;
        self.settle();
    }

    /// Play back towards hidden, from the current position.
    ///
    /// A group that was never shown has nothing to undo.
    pub fn reverse(&mut self) {
        if matches!(self.state, PlaybackState::Pending | PlaybackState::Hidden) {
            return;
        }
        self.direction = Some(Direction::Backward);
        self.state = PlaybackState::PlayingOut;
        self.settle();
    }

    /// Stop wherever the playhead is and leave every element fully shown.
    pub fn finish(&mut self) {
        self.playhead = self.spec.total();
        self.direction = None;
        self.state = PlaybackState::Shown;
    }

    pub fn tick(&mut self, dt: Duration) {
        match self.direction {
            Some(Direction::Forward) => {
                self.playhead = (self.playhead + dt).min(self.spec.total());
            }
            Some(Direction::Backward) => {
                self.playhead = self.playhead.saturating_sub(dt);
            }
            None => return,
        }
        self.settle();
    }

    fn settle(&mut self) {
        match self.direction {
            Some(Direction::Forward) if self.playhead >= self.spec.total() => {
                self.direction = None;
                self.state = PlaybackState::Shown;
            }
            Some(Direction::Backward) if self.playhead.is_zero() => {
                self.direction = None;
                self.state = PlaybackState::Hidden;
            }
            _ => {}
        }
    }

    /// Eased progress of element `index`, 0.0 hidden to 1.0 shown.
    pub fn progress(&self, index: usize) -> f32 {
        let start = self.spec.delay + self.spec.stagger.saturating_mul(index as u32);
        let local = self.playhead.saturating_sub(start);
        let raw = if self.spec.duration.is_zero() {
            if self.playhead >= start && self.state != PlaybackState::Pending {
                1.0
            } else {
                0.0
            }
        } else {
            (local.as_secs_f64() / self.spec.duration.as_secs_f64()) as f32
        };
        (self.spec.easing)(raw)
    }

    pub fn frame(&self, index: usize) -> ElementFrame {
        let progress = self.progress(index);
        ElementFrame {
            opacity: progress,
            offset_rows: self.spec.offset_rows * (1.0 - progress),
        }
    }
}

/// All reveal groups of the page, keyed by group id.
#[derive(Debug, Clone)]
pub struct RevealEngine<K> {
    timelines: HashMap<K, RevealTimeline>,
    enabled: bool,
}

impl<K> RevealEngine<K>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    /// With `enabled` false every group is shown from the start and triggers
    /// are ignored.
    pub fn new(enabled: bool) -> Self {
        Self {
            timelines: HashMap::new(),
            enabled,
        }
    }

    /// Register a group. Re-registering keeps the playhead when the element
    /// count is unchanged (layout changes must not restart animations).
    pub fn register(&mut self, key: K, spec: RevealSpec) {
        if let Some(existing) = self.timelines.get_mut(&key) {
            if existing.spec.count == spec.count {
                existing.spec = spec;
                return;
            }
        }

        let mut timeline = RevealTimeline::new(spec);
        if !self.enabled {
            timeline.finish();
        }
        self.timelines.insert(key, timeline);
    }

    /// Drive a group from an observer transition.
    pub fn reveal(&mut self, key: K, visible: bool) {
        if !self.enabled {
            return;
        }
        let Some(timeline) = self.timelines.get_mut(&key) else {
            log::debug!("Reveal for unregistered group {key:?}");
            return;
        };
        if visible {
            timeline.play();
        } else {
            timeline.reverse();
        }
    }

    /// Advance every running group. Returns true while anything moves.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut animating = false;
        for timeline in self.timelines.values_mut() {
            timeline.tick(dt);
            animating |= timeline.is_animating();
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.timelines.values().any(RevealTimeline::is_animating)
    }

    pub fn timeline(&self, key: K) -> Option<&RevealTimeline> {
        self.timelines.get(&key)
    }

    pub fn state(&self, key: K) -> Option<PlaybackState> {
        self.timelines.get(&key).map(RevealTimeline::state)
    }

    /// Frame for one element. Unknown groups render fully shown.
    pub fn frame(&self, key: K, index: usize) -> ElementFrame {
        self.timelines
            .get(&key)
            .map_or(ElementFrame::SHOWN, |timeline| timeline.frame(index))
    }

    pub fn progress(&self, key: K, index: usize) -> f32 {
        self.timelines
            .get(&key)
            .map_or(1.0, |timeline| timeline.progress(index))
    }

    /// Stop everything, leave all elements shown and release the groups.
    pub fn teardown(&mut self) -> Vec<(K, RevealTimeline)> {
        self.timelines.values_mut().for_each(RevealTimeline::finish);
        let released: Vec<(K, RevealTimeline)> = self.timelines.drain().collect();
        log::debug!("Reveal engine released {} groups", released.len());
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_some_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn three_cards() -> RevealTimeline {
        RevealTimeline::new(RevealSpec::new(3, ms(600), ms(100), 3.0))
    }

    #[test]
    fn test_easing_shapes_progress() {
        let spec = RevealSpec::new(1, ms(1000), Duration::ZERO, 0.0);
        let mut line = RevealTimeline::new(spec.with_easing(crate::motion::easing::linear));
        let mut card = RevealTimeline::new(spec);
        for timeline in [&mut line, &mut card] {
            timeline.play();
            timeline.tick(ms(500));
        }

        assert!((line.progress(0) - 0.5).abs() < 1e-3);
        assert!((card.progress(0) - 0.875).abs() < 1e-3);
    }

    #[test]
    fn test_pending_group_is_hidden_and_offset() {
        let timeline = three_cards();
        assert_eq!(timeline.state(), PlaybackState::Pending);
        assert_eq!(
            timeline.frame(0),
            ElementFrame {
                opacity: 0.0,
                offset_rows: 3.0
            }
        );
    }

    #[test]
    fn test_stagger_orders_elements() {
        let mut timeline = three_cards();
        timeline.play();
        timeline.tick(ms(150));

        let first = timeline.frame(0).opacity;
        let second = timeline.frame(1).opacity;
        let third = timeline.frame(2).opacity;
        assert!(first > second);
        assert!(second > 0.0);
        assert_eq!(third, 0.0);
    }

    #[test]
    fn test_play_runs_to_shown() {
        let mut timeline = three_cards();
        timeline.play();
        timeline.tick(ms(799));
        assert_eq!(timeline.state(), PlaybackState::PlayingIn);
        timeline.tick(ms(1));
        assert_eq!(timeline.state(), PlaybackState::Shown);
        for i in 0..3 {
            assert_eq!(timeline.frame(i), ElementFrame::SHOWN);
        }
    }

    #[test]
    fn test_reverse_continues_from_current_value() {
        let mut timeline = three_cards();
        timeline.play();
        timeline.tick(ms(300));
        let before = timeline.frame(0);

        timeline.reverse();
        assert_eq!(timeline.state(), PlaybackState::PlayingOut);
        // Same playhead, same frame: no jump on reversal
        assert_eq!(timeline.frame(0), before);

        timeline.tick(ms(100));
        assert!(timeline.frame(0).opacity < before.opacity);
        assert!(timeline.frame(0).offset_rows > before.offset_rows);

        timeline.tick(ms(200));
        assert_eq!(timeline.state(), PlaybackState::Hidden);
        assert_eq!(timeline.frame(0).opacity, 0.0);
    }

    #[test]
    fn test_retrigger_mid_reverse_resumes_forward() {
        let mut timeline = three_cards();
        timeline.play();
        timeline.tick(ms(400));
        timeline.reverse();
        timeline.tick(ms(100));
        let playhead = timeline.playhead();

        timeline.play();
        assert_eq!(timeline.playhead(), playhead);
        timeline.tick(ms(500));
        assert_eq!(timeline.state(), PlaybackState::Shown);
    }

    #[test]
    fn test_reverse_before_play_is_ignored() {
        let mut timeline = three_cards();
        timeline.reverse();
        assert_eq!(timeline.state(), PlaybackState::Pending);
    }

    #[test]
    fn test_disabled_engine_shows_everything() {
        let mut engine = RevealEngine::new(false);
        engine.register("about", RevealSpec::new(2, ms(1000), ms(100), 3.0));
        engine.reveal("about", false);

        assert_some_eq!(engine.state("about"), PlaybackState::Shown);
        assert_eq!(engine.frame("about", 1), ElementFrame::SHOWN);
        assert!(!engine.tick(ms(16)));
    }

    #[test]
    fn test_teardown_leaves_elements_shown() {
        let mut engine = RevealEngine::new(true);
        engine.register("skills", RevealSpec::new(4, ms(1000), ms(100), 3.0));
        engine.reveal("skills", true);
        engine.tick(ms(200));
        assert!(engine.is_animating());

        let released = engine.teardown();

        assert_eq!(released.len(), 1);
        assert_eq!(released[0].1.state(), PlaybackState::Shown);
        assert_eq!(released[0].1.frame(3), ElementFrame::SHOWN);
        assert!(engine.timeline("skills").is_none());
        // Released groups render shown
        assert_eq!(engine.frame("skills", 0), ElementFrame::SHOWN);
    }

    #[test]
    fn test_reregister_keeps_progress() {
        let mut engine = RevealEngine::new(true);
        engine.register("hero", RevealSpec::new(5, ms(800), ms(50), 3.0));
        engine.reveal("hero", true);
        engine.tick(ms(300));
        let playhead = engine.timeline("hero").map(RevealTimeline::playhead);

        engine.register("hero", RevealSpec::new(5, ms(800), ms(50), 3.0));
        assert_eq!(engine.timeline("hero").map(RevealTimeline::playhead), playhead);
    }

    #[test]
    fn test_delay_shifts_every_element() {
        let spec = RevealSpec::new(2, ms(800), ms(50), 3.0).with_delay(ms(200));
        assert_eq!(spec.total(), ms(1050));

        let mut timeline = RevealTimeline::new(spec);
        timeline.play();
        timeline.tick(ms(200));
        assert_eq!(timeline.frame(0).opacity, 0.0);
    }
}
