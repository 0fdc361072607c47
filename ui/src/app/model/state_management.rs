use super::Model;
use crate::app::view::*;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn view(&mut self) -> AppResult<()> {
        // Borrow the page separately from the terminal
        let page = &mut self.page;

        self.terminal
            .draw(|f| {
                let (page_area, help_area) = split_screen(f.area());

                // No resize event arrives for the initial size
                if page.size() != (page_area.width, page_area.height) {
                    page.resize(page_area.width, page_area.height);
                }

                view_page(f, page_area, page);
                view_navbar(f, page_area, page);
                view_toasts(f, page_area, page);
                view_contact_popup(f, page_area, page);
                view_help_bar(f, help_area, page);
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
