//! Transient notifications stacked in the top-right corner.

use crate::theme::Palette;
use std::collections::VecDeque;
use std::time::Duration;
use tuirealm::ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);
pub const MAX_VISIBLE_TOASTS: usize = 3;
const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(self) -> char {
        match self {
            ToastKind::Success => '✓',
            ToastKind::Error => '✗',
            ToastKind::Info => 'ℹ',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, Some(description.into()))
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, Some(description.into()))
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, None)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    remaining: Duration,
}

/// Newest first, at most [`MAX_VISIBLE_TOASTS`].
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: VecDeque<ActiveToast>,
}

impl ToastStack {
    pub fn push(&mut self, toast: Toast) {
        log::debug!("Toast: {}", toast.title);
        self.toasts.push_front(ActiveToast {
            remaining: toast.duration,
            toast,
        });
        self.toasts.truncate(MAX_VISIBLE_TOASTS);
    }

    /// Age every toast. Returns true when one expired.
    pub fn tick(&mut self, dt: Duration) -> bool {
        for active in &mut self.toasts {
            active.remaining = active.remaining.saturating_sub(dt);
        }
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.remaining.is_zero());
        self.toasts.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().map(|t| &t.toast)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Draw the stack below `top` at the right edge of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, top: u16, stack: &ToastStack, palette: &Palette) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + top;

    for toast in stack.visible() {
        let accent = match toast.kind {
            ToastKind::Success => palette.status_success,
            ToastKind::Error => palette.status_error,
            ToastKind::Info => palette.status_info,
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", toast.kind.icon()), Style::default().fg(accent)),
            Span::styled(
                toast.title.clone(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        if let Some(description) = &toast.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(palette.text_muted),
            )));
        }

        let inner_width = usize::from(width.saturating_sub(2)).max(1);
        let body_rows: usize = lines
            .iter()
            .map(|line| line.width().div_ceil(inner_width).max(1))
            .sum();
        let height = (body_rows as u16 + 2).min(area.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }

        let rect = Rect::new(x, y, width, height);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(palette.surface))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(accent)),
                ),
            rect,
        );
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut stack = ToastStack::default();
        for i in 0..5 {
            stack.push(Toast::info(format!("toast {i}")));
        }

        let titles: Vec<&str> = stack.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["toast 4", "toast 3", "toast 2"]);
    }

    #[test]
    fn test_toasts_expire() {
        let mut stack = ToastStack::default();
        stack.push(Toast::success("Sent", "Thanks"));
        stack.push(Toast::info("Short").with_duration(Duration::from_secs(1)));

        assert!(!stack.tick(Duration::from_millis(900)));
        assert!(stack.tick(Duration::from_millis(100)));
        assert_eq!(stack.len(), 1);
        assert!(stack.tick(Duration::from_secs(4)));
        assert!(stack.is_empty());
    }
}
