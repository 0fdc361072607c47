use crate::app::page::NAVBAR_ROWS;
use crate::sections::SectionId;
use crate::theme::{Palette, ThemePreference};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Clear, Paragraph};

pub struct NavbarView<'a> {
    pub brand: &'a str,
    pub active: SectionId,
    pub theme: ThemePreference,
    pub has_scrolled: bool,
    /// Rows currently slid into view, `0..=NAVBAR_ROWS`.
    pub rows: u16,
    pub palette: &'a Palette,
}

fn bar_lines(view: &NavbarView<'_>, width: u16) -> Vec<Line<'static>> {
    let palette = view.palette;
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            view.brand.to_string(),
            Style::default()
                .fg(palette.primary_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (i, section) in SectionId::ALL.into_iter().enumerate() {
        let style = if section == view.active {
            Style::default()
                .fg(palette.selection_fg)
                .bg(palette.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(palette.shortcut_key),
        ));
        spans.push(Span::styled(format!(" {} ", section.label()), style));
        spans.push(Span::raw(" "));
    }

    let used: usize = spans.iter().map(Span::width).sum();
    let icon = format!("{} ", view.theme.icon());
    let gap = usize::from(width).saturating_sub(used + icon.chars().count());
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(icon, Style::default().fg(palette.secondary_accent)));

    let rule = if view.has_scrolled { "─" } else { " " };
    vec![
        Line::from(spans),
        Line::from(Span::styled(
            rule.repeat(usize::from(width)),
            Style::default().fg(palette.border),
        )),
    ]
}

/// Draw the navbar over the top of `area`, cropped to the rows slid in.
pub fn render_navbar(frame: &mut Frame, area: Rect, view: &NavbarView<'_>) {
    let rows = view.rows.min(NAVBAR_ROWS).min(area.height);
    if rows == 0 {
        return;
    }

    let lines = bar_lines(view, area.width);
    let hidden = usize::from(NAVBAR_ROWS - rows);
    let shown: Vec<Line<'static>> = lines.into_iter().skip(hidden).collect();

    let mut style = Style::default().fg(view.palette.text_primary);
    if view.has_scrolled {
        style = style.bg(view.palette.surface);
    }

    let rect = Rect::new(area.x, area.y, area.width, rows);
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(shown).style(style), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::text;

    #[test]
    fn test_links_every_section_and_theme_icon() {
        let palette = Palette::fallback(ThemePreference::Dark);
        let view = NavbarView {
            brand: "Ada",
            active: SectionId::Skills,
            theme: ThemePreference::Dark,
            has_scrolled: true,
            rows: NAVBAR_ROWS,
            palette: &palette,
        };

        let lines = bar_lines(&view, 120);
        let bar = text(&lines[0]);
        for section in SectionId::ALL {
            assert!(bar.contains(section.label()), "{bar}");
        }
        assert!(bar.starts_with(" Ada"));
        assert!(bar.trim_end().ends_with(ThemePreference::Dark.icon()));
        assert!(text(&lines[1]).starts_with('─'));
    }

    #[test]
    fn test_active_link_is_highlighted() {
        let palette = Palette::fallback(ThemePreference::Light);
        let view = NavbarView {
            brand: "Ada",
            active: SectionId::Projects,
            theme: ThemePreference::Light,
            has_scrolled: false,
            rows: NAVBAR_ROWS,
            palette: &palette,
        };

        let lines = bar_lines(&view, 120);
        let highlighted: Vec<&str> = lines[0]
            .spans
            .iter()
            .filter(|span| span.style.bg == Some(palette.selection_bg))
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" Projects "]);
    }
}
