use crate::app::page::PageState;
use crate::components::contact_form::{ContactPopupView, render_contact_popup};
use crate::components::help_bar::{HelpBar, HelpContext};
use crate::components::navbar::{NavbarView, render_navbar};
use crate::components::toast::render_toasts;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::Frame;

/// Rows kept for the help bar at the bottom of the screen.
pub const HELP_BAR_ROWS: u16 = 1;

/// Split the screen into the page area and the help bar.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_BAR_ROWS)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn view_page(f: &mut Frame, area: Rect, page: &PageState) {
    let palette = page.palette();
    let paragraph = Paragraph::new(page.visible_lines()).style(
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.background),
    );
    f.render_widget(paragraph, area);
}

pub fn view_navbar(f: &mut Frame, area: Rect, page: &PageState) {
    let view = NavbarView {
        brand: &page.content().profile.name,
        active: page.active_section(),
        theme: page.theme().preference(),
        has_scrolled: page.scroll().has_scrolled(),
        rows: page.navbar_rows(),
        palette: page.palette(),
    };
    render_navbar(f, area, &view);
}

pub fn view_help_bar(f: &mut Frame, area: Rect, page: &PageState) {
    let context = if page.form().open {
        HelpContext::ContactForm
    } else {
        HelpContext::Page(page.active_section())
    };
    HelpBar::new(page.keys()).render(f, area, context, page.palette());
}

pub fn view_toasts(f: &mut Frame, area: Rect, page: &PageState) {
    render_toasts(f, area, page.navbar_rows(), page.toasts(), page.palette());
}

pub fn view_contact_popup(f: &mut Frame, area: Rect, page: &PageState) {
    if !page.form().open {
        return;
    }
    let view = ContactPopupView {
        form: page.form(),
        draft: page.contact().draft(),
        errors: page.contact().errors(),
        submission: page.submission(),
        settle: page.settle_frame(),
        palette: page.palette(),
    };
    render_contact_popup(f, area, &view);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_bar_takes_the_last_row() {
        let (page, help) = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(page, Rect::new(0, 0, 80, 23));
        assert_eq!(help, Rect::new(0, 23, 80, 1));
    }
}
