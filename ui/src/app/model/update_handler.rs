use super::Model;
use crate::components::common::{Msg, ToastMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        // Frames only redraw when something moved
        if !matches!(msg, Msg::Tick) {
            self.redraw = true;
        }

        let result = match msg {
            Msg::AppClose => {
                self.shutdown(); // Properly shutdown and terminate
                None
            }
            Msg::ForceRedraw => None,
            Msg::Tick => self.update_tick(),
            Msg::Resize { width, height } => self.update_resize(width, height),
            Msg::Navigation(msg) => self.update_navigation(msg),
            Msg::Theme(msg) => self.update_theme(msg),
            Msg::Contact(msg) => self.update_contact(msg),
            Msg::Interaction(msg) => self.update_interaction(msg),
            Msg::Toast(ToastMsg::Show(toast)) => {
                self.page.push_toast(toast);
                None
            }
        };

        if let Err(e) = self.sync_focus() {
            self.error_reporter
                .report_simple(e, "Model", "sync_focus");
        }

        result
    }
}
