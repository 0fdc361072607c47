use crate::app::model::Model;
use crate::components::common::{Msg, ThemeMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeMsg) -> Option<Msg> {
        match msg {
            ThemeMsg::Toggle => match self.page.toggle_theme() {
                Ok(preference) => {
                    log::info!("Switched to the {preference} theme");
                    None
                }
                Err(e) => {
                    // The palette stays as it was
                    self.error_reporter.report_warning(e, "Theme", "toggle");
                    None
                }
            },
        }
    }
}
