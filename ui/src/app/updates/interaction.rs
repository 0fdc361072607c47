use crate::app::model::Model;
use crate::components::common::{InteractionMsg, Msg, ToastMsg};
use crate::components::toast::{Toast, ToastKind};
use crate::error::AppError;
use copypasta::{ClipboardContext, ClipboardProvider};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_interaction(&mut self, msg: InteractionMsg) -> Option<Msg> {
        match msg {
            InteractionMsg::NextProject => self.page.next_project(),
            InteractionMsg::PreviousProject => self.page.previous_project(),
            InteractionMsg::ToggleExperience => self.page.toggle_experience(),
            InteractionMsg::NextExperience => self.page.next_experience(),
            InteractionMsg::PreviousExperience => self.page.previous_experience(),
            InteractionMsg::OpenDemo => self.open_link(self.page.demo_url(), "live demo"),
            InteractionMsg::OpenSource => self.open_link(self.page.source_url(), "source code"),
            InteractionMsg::OpenAllProjects => {
                self.open_link(self.page.all_projects_url(), "projects page")
            }
            InteractionMsg::OpenCv => self.open_link(self.page.cv_url(), "CV"),
            InteractionMsg::CopyEmail => self.copy_email(),
            InteractionMsg::ShowKeyHelp => {
                let toast = self.key_help_toast();
                return Some(Msg::Toast(ToastMsg::Show(toast)));
            }
        }
        None
    }

    /// Open `url` with the system opener. Links that are not configured are skipped.
    fn open_link(&self, url: Option<String>, what: &'static str) {
        let Some(url) = url else {
            log::debug!("No {what} link configured");
            return;
        };

        let tx = self.tx_to_main.clone();
        self.task_manager.execute_background(async move {
            open::that(&url).map_err(|e| AppError::Io(format!("Failed to open {url}: {e}")))?;
            log::info!("Opened {what} at {url}");
            let _ = tx.send(Msg::Toast(ToastMsg::Show(Toast::info(format!(
                "Opened {what} in your browser"
            )))));
            Ok(())
        });
    }

    fn copy_email(&self) {
        let email = self.page.email().to_string();
        let tx = self.tx_to_main.clone();
        self.task_manager.execute_background(async move {
            let mut ctx = ClipboardContext::new()
                .map_err(|e| AppError::Io(format!("Failed to access clipboard: {e}")))?;
            ctx.set_contents(email.clone())
                .map_err(|e| AppError::Io(format!("Failed to copy email: {e}")))?;
            log::info!("Email address copied to clipboard");
            let _ = tx.send(Msg::Toast(ToastMsg::Show(Toast::success(
                "Email copied!",
                email,
            ))));
            Ok(())
        });
    }

    fn key_help_toast(&self) -> Toast {
        let keys = self.page.keys();
        let description = format!(
            "{}/{} ↑↓ scroll · Space/PgDn page · 1-6 jump · Tab next section · {} theme · {} message · {} back to top · {} quit",
            keys.down(),
            keys.up(),
            keys.theme(),
            keys.contact(),
            keys.back_to_top(),
            keys.quit(),
        );
        Toast::new(ToastKind::Info, "Keyboard shortcuts", Some(description))
    }
}
