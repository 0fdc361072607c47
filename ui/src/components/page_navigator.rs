use crate::components::common::{ContactMsg, InteractionMsg, Msg, NavigationMsg, ThemeMsg};
use crate::config::KeyBindingsConfig;
use crate::sections::SectionId;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Keyboard handling of the page while no popup is open.
#[derive(MockComponent)]
pub struct PageNavigator {
    component: Phantom,
    keys: KeyBindingsConfig,
}

impl PageNavigator {
    pub fn new(keys: KeyBindingsConfig) -> Self {
        Self {
            component: Phantom::default(),
            keys,
        }
    }

    fn on_char(&self, c: char) -> Option<Msg> {
        let keys = &self.keys;

        if let Some(section) = SectionId::from_digit(c) {
            return Some(Msg::Navigation(NavigationMsg::JumpTo(section)));
        }

        let msg = if c == keys.quit() {
            Msg::AppClose
        } else if c == keys.help() {
            Msg::Interaction(InteractionMsg::ShowKeyHelp)
        } else if c == keys.theme() {
            Msg::Theme(ThemeMsg::Toggle)
        } else if c == keys.contact() {
            Msg::Contact(ContactMsg::Open)
        } else if c == keys.down() {
            Msg::Navigation(NavigationMsg::ScrollLines(1))
        } else if c == keys.up() {
            Msg::Navigation(NavigationMsg::ScrollLines(-1))
        } else if c == ' ' {
            Msg::Navigation(NavigationMsg::ScrollPages(1))
        } else if c == keys.back_to_top() {
            Msg::Navigation(NavigationMsg::BackToTop)
        } else if c == keys.next_project() {
            Msg::Interaction(InteractionMsg::NextProject)
        } else if c == keys.prev_project() {
            Msg::Interaction(InteractionMsg::PreviousProject)
        } else if c == keys.open_demo() {
            Msg::Interaction(InteractionMsg::OpenDemo)
        } else if c == keys.open_source() {
            Msg::Interaction(InteractionMsg::OpenSource)
        } else if c == keys.all_projects() {
            Msg::Interaction(InteractionMsg::OpenAllProjects)
        } else if c == keys.toggle_experience() {
            Msg::Interaction(InteractionMsg::ToggleExperience)
        } else if c == keys.next_experience() {
            Msg::Interaction(InteractionMsg::NextExperience)
        } else if c == keys.prev_experience() {
            Msg::Interaction(InteractionMsg::PreviousExperience)
        } else if c == keys.copy_email() {
            Msg::Interaction(InteractionMsg::CopyEmail)
        } else if c == keys.open_cv() {
            Msg::Interaction(InteractionMsg::OpenCv)
        } else {
            return None;
        };
        Some(msg)
    }
}

impl Component<Msg, NoUserEvent> for PageNavigator {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
            return None;
        };
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match code {
            Key::Char(c) => self.on_char(c),
            Key::Down => Some(Msg::Navigation(NavigationMsg::ScrollLines(1))),
            Key::Up => Some(Msg::Navigation(NavigationMsg::ScrollLines(-1))),
            Key::PageDown => Some(Msg::Navigation(NavigationMsg::ScrollPages(1))),
            Key::PageUp => Some(Msg::Navigation(NavigationMsg::ScrollPages(-1))),
            Key::Home => Some(Msg::Navigation(NavigationMsg::Top)),
            Key::End => Some(Msg::Navigation(NavigationMsg::Bottom)),
            Key::Tab => Some(Msg::Navigation(NavigationMsg::NextSection)),
            Key::BackTab => Some(Msg::Navigation(NavigationMsg::PreviousSection)),
            Key::Enter => Some(Msg::Contact(ContactMsg::Open)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(navigator: &mut PageNavigator, code: Key, modifiers: KeyModifiers) -> Option<Msg> {
        navigator.on(Event::Keyboard(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_default_bindings() {
        let mut nav = PageNavigator::new(KeyBindingsConfig::default());

        assert_eq!(
            press(&mut nav, Key::Char('j'), KeyModifiers::NONE),
            Some(Msg::Navigation(NavigationMsg::ScrollLines(1)))
        );
        assert_eq!(
            press(&mut nav, Key::Char('4'), KeyModifiers::NONE),
            Some(Msg::Navigation(NavigationMsg::JumpTo(SectionId::Projects)))
        );
        assert_eq!(
            press(&mut nav, Key::Char('q'), KeyModifiers::NONE),
            Some(Msg::AppClose)
        );
        assert_eq!(
            press(&mut nav, Key::Enter, KeyModifiers::NONE),
            Some(Msg::Contact(ContactMsg::Open))
        );
        assert_eq!(
            press(&mut nav, Key::BackTab, KeyModifiers::SHIFT),
            Some(Msg::Navigation(NavigationMsg::PreviousSection))
        );
    }

    #[test]
    fn test_shifted_symbols_are_accepted() {
        let mut nav = PageNavigator::new(KeyBindingsConfig::default());
        assert_eq!(
            press(&mut nav, Key::Char('}'), KeyModifiers::SHIFT),
            Some(Msg::Interaction(InteractionMsg::NextExperience))
        );
        assert_eq!(
            press(&mut nav, Key::Char('?'), KeyModifiers::SHIFT),
            Some(Msg::Interaction(InteractionMsg::ShowKeyHelp))
        );
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let mut nav = PageNavigator::new(KeyBindingsConfig::default());
        assert_eq!(press(&mut nav, Key::Char('t'), KeyModifiers::CONTROL), None);
        assert_eq!(press(&mut nav, Key::Char('z'), KeyModifiers::NONE), None);
    }
}
