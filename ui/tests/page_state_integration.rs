use claims::*;
use folio::app::page::PageState;
use folio::components::toast::ToastKind;
use folio::config::AppConfig;
use folio::motion::PlaybackState;
use folio::sections::{RevealGroupId, SectionId};
use folio::theme::{
    PreferenceSource, PreferenceStore, ThemeLoader, ThemePreference, ThemeState,
};
use server::contact::{ContactField, SubmissionState, TransportError};
use server::content::PortfolioContent;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

fn theme(store: PreferenceStore) -> ThemeState {
    ThemeState::new(
        ThemePreference::Light,
        PreferenceSource::Default,
        store,
        ThemeLoader::embedded(),
    )
    .unwrap()
}

fn page_with(config: &AppConfig) -> PageState {
    let content = PortfolioContent::embedded().unwrap();
    let mut page = PageState::new(content, theme(PreferenceStore::disabled()), config);
    page.resize(100, 10);
    page
}

fn animated_page() -> PageState {
    page_with(&AppConfig::default())
}

fn static_page() -> PageState {
    page_with(&AppConfig::default().without_animations())
}

fn run_for(page: &mut PageState, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        page.tick(FRAME, Instant::now());
        elapsed += FRAME;
    }
}

fn type_text(page: &mut PageState, text: &str) {
    for ch in text.chars() {
        page.type_char(ch);
    }
}

fn fill_valid_draft(page: &mut PageState) {
    page.open_contact();
    type_text(page, "Alice");
    page.focus_next();
    type_text(page, "alice@example.com");
    page.focus_next();
    type_text(page, "Hello, I would like to talk about a project.");
}

mod navigation {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let page = static_page();
        assert_eq!(page.active_section(), SectionId::Home);
        assert_eq!(page.scroll().offset(), 0);
    }

    #[test]
    fn test_jump_updates_active_section() {
        let mut page = static_page();

        page.jump_to(SectionId::Skills);
        assert_eq!(page.active_section(), SectionId::Skills);

        page.jump_to(SectionId::Experience);
        assert_eq!(page.active_section(), SectionId::Experience);

        page.previous_section();
        assert_eq!(page.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_smooth_jump_lands_on_section_top() {
        let mut page = animated_page();
        let target = page.layout().section_span(SectionId::Projects).unwrap().top;

        page.jump_to(SectionId::Projects);
        assert!(page.scroll().is_smooth_scrolling());

        run_for(&mut page, Duration::from_secs(1));
        assert!(!page.scroll().is_smooth_scrolling());
        assert_eq!(page.scroll().offset(), target.min(page.scroll().max_offset()));
        assert_eq!(page.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        let mut page = static_page();

        assert!(!page.scroll_lines(-5));
        assert!(page.scroll_lines(3));
        assert_eq!(page.scroll().offset(), 3);

        page.scroll_to_bottom();
        assert_eq!(page.scroll().offset(), page.scroll().max_offset());
        assert!(!page.scroll_lines(1));

        page.scroll_to_top();
        assert_eq!(page.scroll().offset(), 0);
    }

    #[test]
    fn test_resize_keeps_offset_in_range() {
        let mut page = static_page();
        page.scroll_to_bottom();

        page.resize(100, 40);
        assert_le!(page.scroll().offset(), page.scroll().max_offset());
        assert_eq!(page.size(), (100, 40));
    }
}

mod reveal {
    use super::*;

    #[test]
    fn test_section_reveals_and_reverses() {
        let mut page = animated_page();
        let contact = RevealGroupId::Section(SectionId::Contact);
        assert_some_eq!(page.reveal().state(contact), PlaybackState::Pending);

        page.jump_to(SectionId::Contact);
        run_for(&mut page, Duration::from_secs(3));
        assert_some_eq!(page.reveal().state(contact), PlaybackState::Shown);

        page.scroll_to_top();
        assert_some_eq!(page.reveal().state(contact), PlaybackState::PlayingOut);

        run_for(&mut page, Duration::from_secs(3));
        assert_some_eq!(page.reveal().state(contact), PlaybackState::Hidden);
    }

    #[test]
    fn test_disabled_animations_show_everything() {
        let page = static_page();
        let contact = RevealGroupId::Section(SectionId::Contact);

        assert_some_eq!(page.reveal().state(contact), PlaybackState::Shown);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_teardown_leaves_page_shown() {
        let mut page = animated_page();
        page.teardown();

        assert_none!(page.reveal().state(RevealGroupId::Section(SectionId::Home)));
        assert!(!page.reveal().is_animating());
    }
}

mod counters {
    use super::*;

    #[test]
    fn test_counters_wait_for_skills() {
        let mut page = animated_page();
        run_for(&mut page, Duration::from_millis(500));
        assert_eq!(page.counters().value(0), 0);
    }

    #[test]
    fn test_counters_finish_at_skill_level_and_stay() {
        let mut page = animated_page();
        let levels: Vec<u8> = page.content().skills().map(|s| s.level).collect();

        page.jump_to(SectionId::Skills);
        run_for(&mut page, Duration::from_secs(3));
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(page.counters().value(i), *level);
        }

        // One-shot: leaving and coming back never restarts them
        page.scroll_to_top();
        page.jump_to(SectionId::Skills);
        page.tick(FRAME, Instant::now());
        assert_eq!(page.counters().value(0), levels[0]);
    }
}

mod interaction {
    use super::*;

    #[test]
    fn test_collapsing_experience_shortens_page() {
        let mut page = static_page();
        let before = page.layout().height();

        page.toggle_experience();
        assert_none!(page.interaction().expanded_experience);
        assert_lt!(page.layout().height(), before);

        page.toggle_experience();
        assert_eq!(page.layout().height(), before);
    }

    #[test]
    fn test_project_selection_wraps() {
        let mut page = static_page();
        let count = page.content().projects.items.len();

        page.previous_project();
        assert_eq!(page.interaction().selected_project, count - 1);
        page.next_project();
        assert_eq!(page.interaction().selected_project, 0);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::at(dir.path().join("preferences.toml"));
        let content = PortfolioContent::embedded().unwrap();
        let mut page = PageState::new(content, theme(store.clone()), &AppConfig::default());
        let light = page.palette().background;

        assert_ok_eq!(page.toggle_theme(), ThemePreference::Dark);
        assert_ne!(page.palette().background, light);
        assert_ok_eq!(store.load(), Some(ThemePreference::Dark));
    }
}

mod contact {
    use super::*;

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut page = static_page();
        page.open_contact();
        type_text(&mut page, "Alice");
        page.focus_next();
        type_text(&mut page, "not-an-email");

        assert_none!(page.submit_contact());
        assert_eq!(page.form().focus, ContactField::Email);
        assert!(page.contact().errors().contains(ContactField::Email));
        assert!(page.contact().errors().contains(ContactField::Message));
        assert_eq!(page.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_successful_delivery() {
        let mut page = static_page();
        fill_valid_draft(&mut page);

        let ticket = page.submit_contact().unwrap();
        assert_eq!(page.submission(), SubmissionState::Submitting);
        assert!(!page.type_char('x'));
        assert_none!(page.submit_contact());

        let now = Instant::now();
        assert_some!(page.contact_delivered(ticket.id(), Ok(()), now));
        assert_matches!(page.submission(), SubmissionState::Sent { .. });
        assert!(page.contact().draft().is_empty());

        let toast = page.toasts().visible().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message sent successfully!");

        page.tick(FRAME, now + Duration::from_secs(3));
        assert_eq!(page.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_failed_delivery_keeps_draft() {
        let mut page = static_page();
        fill_valid_draft(&mut page);
        let email = page.email().to_string();

        let ticket = page.submit_contact().unwrap();
        let error = TransportError::Rejected {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_some!(page.contact_delivered(ticket.id(), Err(error), Instant::now()));

        assert_eq!(page.submission(), SubmissionState::Failed);
        assert_eq!(page.contact().draft().get(ContactField::Name), "Alice");
        let toast = page.toasts().visible().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.description.as_deref().unwrap().contains(&email));

        // Editing returns the form to idle
        page.backspace();
        assert_eq!(page.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut page = static_page();
        fill_valid_draft(&mut page);
        let _ticket = page.submit_contact().unwrap();

        assert_none!(page.contact_delivered(uuid::Uuid::new_v4(), Ok(()), Instant::now()));
        assert_eq!(page.submission(), SubmissionState::Submitting);
    }
}
