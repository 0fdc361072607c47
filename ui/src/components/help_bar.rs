use crate::config::KeyBindingsConfig;
use crate::sections::SectionId;
use crate::theme::Palette;
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;

/// Which keys are live right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContext {
    Page(SectionId),
    ContactForm,
}

/// Bottom bar that shows keyboard shortcuts for the current context
pub struct HelpBar<'a> {
    keys: &'a KeyBindingsConfig,
}

impl<'a> HelpBar<'a> {
    pub fn new(keys: &'a KeyBindingsConfig) -> Self {
        Self { keys }
    }

    /// Get global shortcuts that should appear in all page contexts
    fn global_shortcuts(&self) -> Vec<(String, &'static str)> {
        vec![
            (format!("[{}]", self.keys.theme()), "Theme"),
            (format!("[{}]", self.keys.help()), "Keys"),
            (format!("[{}]", self.keys.quit()), "Quit"),
        ]
    }

    /// Get context-specific shortcuts
    fn context_shortcuts(&self, context: HelpContext) -> Vec<(String, &'static str)> {
        let keys = self.keys;
        match context {
            HelpContext::ContactForm => vec![
                ("[Tab/↓]".to_string(), "Next field"),
                ("[Shift+Tab/↑]".to_string(), "Previous field"),
                ("[Enter]".to_string(), "Send"),
                ("[Esc]".to_string(), "Close"),
            ],
            HelpContext::Page(section) => {
                let mut shortcuts = vec![
                    (format!("[↑↓/{}{}]", keys.down(), keys.up()), "Scroll"),
                    ("[1-6]".to_string(), "Jump"),
                ];
                match section {
                    SectionId::Projects => {
                        shortcuts.push((
                            format!("[{}/{}]", keys.prev_project(), keys.next_project()),
                            "Select",
                        ));
                        shortcuts.push((format!("[{}]", keys.open_demo()), "Demo"));
                        shortcuts.push((format!("[{}]", keys.open_source()), "Code"));
                    }
                    SectionId::Experience => {
                        shortcuts.push((
                            format!("[{}/{}]", keys.prev_experience(), keys.next_experience()),
                            "Select",
                        ));
                        shortcuts.push((format!("[{}]", keys.toggle_experience()), "Expand"));
                    }
                    SectionId::Contact => {
                        shortcuts.push((format!("[Enter/{}]", keys.contact()), "Message"));
                        shortcuts.push((format!("[{}]", keys.copy_email()), "Copy email"));
                    }
                    SectionId::Home | SectionId::About => {
                        shortcuts.push((format!("[{}]", keys.open_cv()), "CV"));
                    }
                    SectionId::Skills => {}
                }
                shortcuts
            }
        }
    }

    fn help_line(&self, context: HelpContext, palette: &Palette) -> Line<'static> {
        let mut shortcuts = self.context_shortcuts(context);
        if matches!(context, HelpContext::Page(_)) {
            shortcuts.extend(self.global_shortcuts());
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in shortcuts.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(palette.border)));
            }
            spans.push(Span::styled(key, Style::default().fg(palette.shortcut_key)));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(palette.shortcut_description),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, context: HelpContext, palette: &Palette) {
        let paragraph = Paragraph::new(self.help_line(context, palette))
            .style(Style::default().bg(palette.surface))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
