use crate::app::model::Model;
use crate::components::common::{Msg, NavigationMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_navigation(&mut self, msg: NavigationMsg) -> Option<Msg> {
        match msg {
            NavigationMsg::ScrollLines(delta) => {
                self.page.scroll_lines(delta);
            }
            NavigationMsg::ScrollPages(pages) => {
                self.page.scroll_pages(pages);
            }
            NavigationMsg::Top => {
                self.page.scroll_to_top();
            }
            NavigationMsg::Bottom => {
                self.page.scroll_to_bottom();
            }
            NavigationMsg::JumpTo(section) => self.page.jump_to(section),
            NavigationMsg::NextSection => self.page.next_section(),
            NavigationMsg::PreviousSection => self.page.previous_section(),
            NavigationMsg::BackToTop => self.page.back_to_top(),
        }
        None
    }
}
