use crate::components::common::Msg;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event.
///
/// Turns ticks and resizes into messages and owns `Ctrl-C`. Plain characters
/// are left to the focused component so typing in the contact form never
/// triggers a page shortcut.
#[derive(MockComponent, Default)]
pub struct GlobalKeyWatcher {
    component: Phantom,
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Tick => Some(Msg::Tick),
            Event::WindowResize(width, height) => Some(Msg::Resize { width, height }),
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_frames_and_resizes() {
        let mut watcher = GlobalKeyWatcher::default();
        assert_eq!(watcher.on(Event::Tick), Some(Msg::Tick));
        assert_eq!(
            watcher.on(Event::WindowResize(120, 40)),
            Some(Msg::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_only_ctrl_c_quits() {
        let mut watcher = GlobalKeyWatcher::default();
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::new(
                Key::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Msg::AppClose)
        );
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::new(
                Key::Char('q'),
                KeyModifiers::NONE
            ))),
            None
        );
    }
}
