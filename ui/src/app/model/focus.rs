use super::Model;
use crate::components::common::ComponentId;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Give keyboard focus to `id`.
    pub fn set_active_component(&mut self, id: ComponentId) -> AppResult<()> {
        if self.active_component == id {
            return Ok(());
        }
        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))?;
        log::debug!("Focus {:?} -> {:?}", self.active_component, id);
        self.active_component = id;
        Ok(())
    }

    /// The contact popup owns the keyboard while it is open.
    pub fn sync_focus(&mut self) -> AppResult<()> {
        let id = if self.page.form().open {
            ComponentId::ContactForm
        } else {
            ComponentId::PageNavigator
        };
        self.set_active_component(id)
    }
}
