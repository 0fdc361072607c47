use crate::motion::{Animation, Tween, ease_in_out, lerp};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: u16,
    to: u16,
    tween: Tween,
}

/// Scroll offset of the page in rows, with direction and smooth scrolling.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: u16,
    page_height: u16,
    viewport_height: u16,
    direction: ScrollDirection,
    hide_threshold: u16,
    scrolled_rows: u16,
    smooth_duration: Duration,
    smooth: Option<SmoothScroll>,
}

impl ScrollTracker {
    pub fn new(hide_threshold: u16, scrolled_rows: u16, smooth_duration: Duration) -> Self {
        Self {
            offset: 0,
            page_height: 0,
            viewport_height: 0,
            direction: ScrollDirection::None,
            hide_threshold,
            scrolled_rows,
            smooth_duration,
            smooth: None,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    /// Scrolled far enough for the navbar background.
    pub fn has_scrolled(&self) -> bool {
        self.offset > self.scrolled_rows
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    pub fn max_offset(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Update the page and viewport heights, keeping the offset in range.
    pub fn resize(&mut self, page_height: u16, viewport_height: u16) {
        self.page_height = page_height;
        self.viewport_height = viewport_height;
        if let Some(smooth) = &mut self.smooth {
            smooth.to = smooth.to.min(page_height.saturating_sub(viewport_height));
        }
        let clamped = self.offset.min(self.max_offset());
        self.offset = clamped;
    }

    /// Manual scroll; cancels any smooth scroll in progress.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.smooth = None;
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.set_offset(target as u16)
    }

    /// Jump without animating.
    pub fn jump_to(&mut self, target: u16) -> bool {
        self.smooth = None;
        self.set_offset(target.min(self.max_offset()))
    }

    /// Animate to `target` with an ease-in-out curve.
    pub fn scroll_to(&mut self, target: u16) {
        let target = target.min(self.max_offset());
        if self.smooth_duration.is_zero() || target == self.offset {
            self.jump_to(target);
            return;
        }
        self.smooth = Some(SmoothScroll {
            from: self.offset,
            to: target,
            tween: Tween::new(self.smooth_duration).easing(ease_in_out),
        });
    }

    /// Advance a smooth scroll. Returns true when the offset changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(smooth) = self.smooth.as_mut() else {
            return false;
        };
        smooth.tween.tick(dt);
        let position = lerp(f32::from(smooth.from), f32::from(smooth.to), smooth.tween.value());
        let done = smooth.tween.is_complete();
        let target = if done { smooth.to } else { position.round() as u16 };
        if done {
            self.smooth = None;
        }
        self.set_offset(target.min(self.max_offset()))
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let previous = self.offset;
        if offset > previous && offset > self.hide_threshold {
            self.direction = ScrollDirection::Down;
        } else if offset < previous {
            self.direction = ScrollDirection::Up;
        }
        self.offset = offset;
        offset != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        let mut tracker = ScrollTracker::new(4, 2, Duration::from_millis(500));
        tracker.resize(100, 20);
        tracker
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut tracker = tracker();
        tracker.scroll_by(-5);
        assert_eq!(tracker.offset(), 0);
        tracker.scroll_by(500);
        assert_eq!(tracker.offset(), 80);

        tracker.resize(50, 20);
        assert_eq!(tracker.offset(), 30);
    }

    #[test]
    fn test_direction_needs_threshold_to_go_down() {
        let mut tracker = tracker();
        tracker.scroll_by(3);
        assert_eq!(tracker.direction(), ScrollDirection::None);
        tracker.scroll_by(2);
        assert_eq!(tracker.direction(), ScrollDirection::Down);
        tracker.scroll_by(-1);
        assert_eq!(tracker.direction(), ScrollDirection::Up);
    }

    #[test]
    fn test_has_scrolled_after_two_rows() {
        let mut tracker = tracker();
        tracker.scroll_by(2);
        assert!(!tracker.has_scrolled());
        tracker.scroll_by(1);
        assert!(tracker.has_scrolled());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut tracker = tracker();
        tracker.scroll_to(60);
        assert!(tracker.is_smooth_scrolling());

        tracker.tick(Duration::from_millis(250));
        assert!(tracker.offset() > 0 && tracker.offset() < 60);
        tracker.tick(Duration::from_millis(250));
        assert_eq!(tracker.offset(), 60);
        assert!(!tracker.is_smooth_scrolling());
    }

    #[test]
    fn test_manual_scroll_cancels_smooth_scroll() {
        let mut tracker = tracker();
        tracker.scroll_to(60);
        tracker.tick(Duration::from_millis(100));
        let reached = tracker.offset();

        tracker.scroll_by(1);
        assert!(!tracker.is_smooth_scrolling());
        assert!(!tracker.tick(Duration::from_millis(400)));
        assert_eq!(tracker.offset(), reached + 1);
    }
}
