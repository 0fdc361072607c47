use crate::app::model::Model;
use crate::app::view::HELP_BAR_ROWS;
use crate::components::common::Msg;
use std::time::Instant;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_tick(&mut self) -> Option<Msg> {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.page.tick(dt, now) {
            self.redraw = true;
        }
        None
    }

    pub fn update_resize(&mut self, width: u16, height: u16) -> Option<Msg> {
        self.page
            .resize(width, height.saturating_sub(HELP_BAR_ROWS));
        None
    }
}
