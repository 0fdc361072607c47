use crate::app::page::ContactFormState;
use crate::components::base_popup::{PopupBuilder, PopupLayout};
use crate::components::common::{ContactMsg, Msg};
use crate::motion::ElementFrame;
use crate::sections::{key_hint, truncate};
use crate::theme::Palette;
use server::contact::{ContactDraft, ContactField, SubmissionState, ValidationErrors};
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Keyboard handling while the contact popup is open.
#[derive(MockComponent, Default)]
pub struct ContactForm {
    component: Phantom,
}

impl Component<Msg, NoUserEvent> for ContactForm {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
            return None;
        };
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        let msg = match code {
            Key::Esc => ContactMsg::Close,
            Key::Enter => ContactMsg::Submit,
            Key::Tab | Key::Down => ContactMsg::FocusNext,
            Key::BackTab | Key::Up => ContactMsg::FocusPrevious,
            Key::Backspace => ContactMsg::Backspace,
            Key::Char(c) => ContactMsg::Input(c),
            _ => return None,
        };
        Some(Msg::Contact(msg))
    }
}

/// What the popup needs to draw itself.
pub struct ContactPopupView<'a> {
    pub form: ContactFormState,
    pub draft: &'a ContactDraft,
    pub errors: &'a ValidationErrors,
    pub submission: SubmissionState,
    pub settle: ElementFrame,
    pub palette: &'a Palette,
}

const FIELD_WIDTH: usize = 44;

fn field_lines(view: &ContactPopupView<'_>, field: ContactField) -> Vec<Line<'static>> {
    let palette = view.palette;
    let focused = view.form.focus == field;
    let value = view.draft.get(field);

    let label_style = if focused {
        Style::default()
            .fg(palette.primary_accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let border = match (focused, view.errors.contains(field)) {
        (_, true) => palette.status_error,
        (true, false) => palette.primary_accent,
        (false, false) => palette.border,
    };

    // Keep the tail visible while typing past the field width.
    let chars: Vec<char> = value.chars().collect();
    let shown: String = if chars.len() > FIELD_WIDTH - 1 {
        chars[chars.len() - (FIELD_WIDTH - 1)..].iter().collect()
    } else {
        value.to_string()
    };
    let cursor = if focused && view.submission != SubmissionState::Submitting {
        "▏"
    } else {
        " "
    };
    let fill = FIELD_WIDTH.saturating_sub(shown.chars().count() + 1);

    let mut lines = vec![
        Line::from(Span::styled(field.label().to_string(), label_style)),
        Line::from(vec![
            Span::styled("│ ", Style::default().fg(border)),
            Span::styled(shown, Style::default().fg(palette.text_primary)),
            Span::styled(cursor, Style::default().fg(palette.primary_accent)),
            Span::raw(" ".repeat(fill)),
            Span::styled(" │", Style::default().fg(border)),
        ]),
    ];
    match view.errors.message(field) {
        Some(message) => lines.push(Line::from(Span::styled(
            truncate(&message, FIELD_WIDTH + 4),
            Style::default().fg(palette.status_error),
        ))),
        None => lines.push(Line::default()),
    }
    lines
}

fn status_line(view: &ContactPopupView<'_>) -> Line<'static> {
    let palette = view.palette;
    match view.submission {
        SubmissionState::Submitting => Line::from(Span::styled(
            "Sending...",
            Style::default().fg(palette.status_info),
        )),
        SubmissionState::Sent { .. } => Line::from(Span::styled(
            "✓ Message sent",
            Style::default()
                .fg(palette.status_success)
                .add_modifier(Modifier::BOLD),
        )),
        SubmissionState::Failed => Line::from(Span::styled(
            "✗ Sending failed, press Enter to retry",
            Style::default().fg(palette.status_error),
        )),
        SubmissionState::Idle => {
            let mut spans = key_hint("Enter", "Send Message ", palette);
            spans.extend(key_hint("Tab", "Next field ", palette));
            spans.extend(key_hint("Esc", "Close", palette));
            Line::from(spans)
        }
    }
}

/// Draw the contact popup centred in `area`.
pub fn render_contact_popup(frame: &mut Frame, area: Rect, view: &ContactPopupView<'_>) {
    let mut popup = PopupLayout::centered_fixed(area, FIELD_WIDTH as u16 + 10, 17);
    popup.y = popup
        .y
        .saturating_add(view.settle.shift())
        .min(area.bottom().saturating_sub(popup.height));

    let mut builder = PopupBuilder::new("Send Me a Message", view.palette)
        .opacity(view.settle.opacity);
    for field in ContactField::ALL {
        for line in field_lines(view, field) {
            builder = builder.add_line(line);
        }
    }
    builder.add_line(status_line(view)).render(frame, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(form: &mut ContactForm, code: Key) -> Option<Msg> {
        form.on(Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_typing_goes_to_the_form() {
        let mut form = ContactForm::default();
        assert_eq!(
            press(&mut form, Key::Char('q')),
            Some(Msg::Contact(ContactMsg::Input('q')))
        );
        assert_eq!(
            press(&mut form, Key::Char('1')),
            Some(Msg::Contact(ContactMsg::Input('1')))
        );
        assert_eq!(
            press(&mut form, Key::Backspace),
            Some(Msg::Contact(ContactMsg::Backspace))
        );
    }

    #[test]
    fn test_form_keys() {
        let mut form = ContactForm::default();
        assert_eq!(
            press(&mut form, Key::Enter),
            Some(Msg::Contact(ContactMsg::Submit))
        );
        assert_eq!(
            press(&mut form, Key::Esc),
            Some(Msg::Contact(ContactMsg::Close))
        );
        assert_eq!(
            press(&mut form, Key::Tab),
            Some(Msg::Contact(ContactMsg::FocusNext))
        );
        assert_eq!(
            press(&mut form, Key::Up),
            Some(Msg::Contact(ContactMsg::FocusPrevious))
        );
        assert_eq!(press(&mut form, Key::Function(1)), None);
    }
}
