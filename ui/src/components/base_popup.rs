use crate::sections::page::fade_line;
use crate::theme::Palette;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Common popup styling
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub background: Color,
}

impl PopupStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            border_color: palette.primary_accent,
            title_color: palette.primary_accent,
            text_color: palette.text_primary,
            background: palette.surface,
        }
    }
}

/// Base popup builder for consistent popup creation
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    palette: Palette,
    content_lines: Vec<Line<'static>>,
    opacity: f32,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>, palette: &Palette) -> Self {
        Self {
            title: title.into(),
            style: PopupStyle::from_palette(palette),
            palette: *palette,
            content_lines: Vec::new(),
            opacity: 1.0,
        }
    }

    pub fn add_line(mut self, line: Line<'static>) -> Self {
        self.content_lines.push(line);
        self
    }

    /// Fade the content towards the palette background.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.style.border_color))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            );

        let mut all_lines = vec![Line::default()];
        all_lines.extend(
            self.content_lines
                .iter()
                .map(|line| fade_line(line, self.opacity, &self.palette)),
        );

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(
                Style::default()
                    .fg(self.style.text_color)
                    .bg(self.style.background),
            )
            .alignment(Alignment::Center);

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Common popup sizing utilities
pub struct PopupLayout;

impl PopupLayout {
    /// Calculate centered popup area with given percentage of screen
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (area.width * width_percent) / 100;
        let popup_height = (area.height * height_percent) / 100;
        Self::centered_fixed(area, popup_width, popup_height)
    }

    /// Centre a popup of a fixed size, shrunk to fit `area`.
    pub fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);

        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        Rect {
            x: area.x + x,
            y: area.y + y,
            width,
            height,
        }
    }
}
