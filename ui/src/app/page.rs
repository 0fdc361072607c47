//! Headless page state.
//!
//! Everything the page shows lives here, independent of tui-realm and the
//! terminal. The model forwards messages to it and the view reads from it,
//! which keeps every behaviour testable without a terminal.

use crate::components::toast::{Toast, ToastStack};
use crate::config::{AppConfig, KeyBindingsConfig, NavigationConfig};
use crate::error::AppResult;
use crate::motion::{
    Animation, ElementFrame, RevealEngine, SettlePulse, SkillCounters, Slide, Tween,
    ease_out_cubic,
};
use crate::sections::footer::Footer;
use crate::sections::page::PageLayout;
use crate::sections::{
    Block, Interaction, RenderContext, RevealGroup, RevealGroupId, Section, SectionId,
    build_sections,
};
use crate::theme::{Palette, ThemePreference, ThemeState};
use crate::viewport::{
    ActiveSectionTracker, ObserveMode, ScrollDirection, ScrollTracker, Span, Trigger,
    ViewportRect, VisibilityObserver,
};
use chrono::Datelike;
use server::contact::{
    ContactField, ContactFlow, SubmissionOutcome, SubmissionState, SubmissionTicket, SubmitError,
    TransportError,
};
use server::content::PortfolioContent;
use std::time::{Duration, Instant};
use tuirealm::ratatui::text::Line;
use uuid::Uuid;

/// Skills section visibility that starts the counters.
const COUNTER_THRESHOLD: f32 = 0.2;
/// Rows the page rises while fading in on startup.
const ENTRANCE_OFFSET_ROWS: f32 = 2.0;
/// Height of the navbar overlay.
pub const NAVBAR_ROWS: u16 = 2;

/// Which popup field has focus and whether the popup is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFormState {
    pub open: bool,
    pub focus: ContactField,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            open: false,
            focus: ContactField::Name,
        }
    }
}

/// A reveal group with its own observer.
struct ObservedGroup {
    group: RevealGroup,
    observer: VisibilityObserver<RevealGroupId>,
}

pub struct PageState {
    content: PortfolioContent,
    sections: Vec<Box<dyn Section>>,
    footer: Footer,
    groups: Vec<ObservedGroup>,
    layout: PageLayout,
    width: u16,

    scroll: ScrollTracker,
    reveal: RevealEngine<RevealGroupId>,
    section_observer: VisibilityObserver<SectionId>,
    active: ActiveSectionTracker<SectionId>,
    counter_observer: VisibilityObserver<SectionId>,
    counters: SkillCounters,

    theme: ThemeState,
    contact: ContactFlow,
    form: ContactFormState,
    toasts: ToastStack,
    interaction: Interaction,

    navbar: Slide,
    entrance: Tween,
    settle: SettlePulse,
    settle_duration: Duration,
    toast_duration: Duration,
    navigation: NavigationConfig,
    keys: KeyBindingsConfig,
    animate: bool,
}

impl PageState {
    pub fn new(content: PortfolioContent, theme: ThemeState, config: &AppConfig) -> Self {
        let animation = config.animation();
        let navigation = config.navigation().clone();
        let animate = animation.enabled();

        let sections = build_sections(&content);
        let mut reveal = RevealEngine::new(animate);
        let groups: Vec<ObservedGroup> = sections
            .iter()
            .flat_map(|section| section.reveal_groups(animation))
            .map(|group| {
                reveal.register(group.id, group.spec);
                let mut observer = VisibilityObserver::new(group.trigger, group.mode);
                observer.observe(group.id, Span::default());
                ObservedGroup { group, observer }
            })
            .collect();

        let mut section_observer = VisibilityObserver::new(
            Trigger::Ratio(navigation.active_threshold()),
            ObserveMode::Repeating,
        );
        for id in SectionId::ALL {
            section_observer.observe(id, Span::default());
        }
        let mut counter_observer =
            VisibilityObserver::new(Trigger::Ratio(COUNTER_THRESHOLD), ObserveMode::Once);
        counter_observer.observe(SectionId::Skills, Span::default());

        let counters = SkillCounters::new(
            content.skills().map(|skill| skill.level),
            animation.counter_step(),
            animate,
        );

        let mut entrance = Tween::new(animation.entrance_duration())
            .delay(animation.entrance_delay())
            .easing(ease_out_cubic);
        if !animate {
            entrance.finish();
        }
        let navbar_slide = if animate {
            animation.navbar_slide()
        } else {
            Duration::ZERO
        };
        let smooth_scroll = if animate {
            navigation.smooth_scroll()
        } else {
            Duration::ZERO
        };

        let mut page = Self {
            interaction: Interaction::new(content.experience.len()),
            footer: Footer::new(&content),
            content,
            sections,
            groups,
            layout: PageLayout::default(),
            width: 0,
            scroll: ScrollTracker::new(
                navigation.hide_on_scroll_rows(),
                navigation.scrolled_rows(),
                smooth_scroll,
            ),
            reveal,
            section_observer,
            active: ActiveSectionTracker::new(SectionId::ALL.to_vec(), navigation.tie_break())
                .with_initial(SectionId::Home),
            counter_observer,
            counters,
            theme,
            contact: ContactFlow::new(config.contact().sent_display()),
            form: ContactFormState::default(),
            toasts: ToastStack::default(),
            navbar: Slide::shown(navbar_slide),
            entrance,
            settle: SettlePulse::default(),
            settle_duration: animation.settle_duration(),
            toast_duration: config.contact().toast_duration(),
            keys: config.keys().clone(),
            navigation,
            animate,
        };
        page.relayout();
        page
    }

    // ---- geometry -------------------------------------------------------

    /// Set the size of the page area (the terminal minus the help bar).
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("Page resized to {width}x{height}");
        self.width = width;
        self.scroll.resize(self.layout.height(), height);
        self.relayout();
        self.observe();
    }

    /// `(width, viewport height)` of the page area.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.scroll.viewport_height())
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            palette: self.theme.palette(),
            width: self.width,
            reveal: &self.reveal,
            counters: &self.counters,
            interaction: &self.interaction,
            keys: &self.keys,
            submission: self.contact.state(),
            year: chrono::Local::now().year(),
        }
    }

    fn build_layout(&self) -> PageLayout {
        let ctx = self.context();
        let sections = self
            .sections
            .iter()
            .map(|section| (section.id(), section.blocks(&ctx)))
            .collect();
        let footer: Vec<Block> = self.footer.blocks(&ctx);
        PageLayout::build(sections, footer)
    }

    /// Recompute geometry after a resize or an accordion change.
    fn relayout(&mut self) {
        self.layout = self.build_layout();

        for observed in &mut self.groups {
            let span = self.layout.group_span(observed.group.id).unwrap_or_default();
            observed.observer.update_span(observed.group.id, span);
        }
        for (id, span) in self.layout.sections() {
            self.section_observer.update_span(*id, *span);
            if *id == SectionId::Skills {
                self.counter_observer.update_span(*id, *span);
            }
        }
        self.scroll
            .resize(self.layout.height(), self.scroll.viewport_height());
    }

    /// Without a viewport height there is no geometry to intersect with.
    fn viewport(&self) -> Option<ViewportRect> {
        let height = self.scroll.viewport_height();
        (height > 0).then(|| ViewportRect::new(self.scroll.offset(), height))
    }

    /// Evaluate every observer and apply the entries.
    fn observe(&mut self) -> bool {
        if self.width == 0 {
            return false;
        }
        let viewport = self.viewport();
        let mut changed = false;

        for observed in &mut self.groups {
            for entry in observed.observer.evaluate(viewport) {
                self.reveal.reveal(entry.target, entry.is_intersecting);
                changed = true;
            }
        }

        let entries = self.section_observer.evaluate(viewport);
        if !entries.is_empty() {
            let previous = self.active.active();
            if self.active.apply(&entries) {
                log::debug!(
                    "Active section {:?} -> {:?}",
                    previous,
                    self.active.active()
                );
                changed = true;
            }
        }

        if self
            .counter_observer
            .evaluate(viewport)
            .iter()
            .any(|entry| entry.is_intersecting)
        {
            log::debug!("Skills in view, starting counters");
            self.counters.start_all();
            changed = true;
        }
        changed
    }

    // ---- frame ----------------------------------------------------------

    /// Advance every animation by `dt`. Returns true when a redraw is needed.
    pub fn tick(&mut self, dt: Duration, now: Instant) -> bool {
        let mut redraw = self.scroll.tick(dt);
        redraw |= self.observe();

        redraw |= self.reveal.tick(dt);
        redraw |= self.counters.tick(dt);
        redraw |= self.toasts.tick(dt);
        redraw |= self.settle.tick(dt);

        let hide = self.scroll.direction() == ScrollDirection::Down && !self.form.open;
        self.navbar.show(!hide);
        redraw |= self.navbar.tick(dt);

        if !self.entrance.is_complete() {
            self.entrance.tick(dt);
            redraw = true;
        }
        if self.contact.tick(now) {
            redraw = true;
        }
        redraw
    }

    /// Page entrance applied on top of every block.
    pub fn entrance_frame(&self) -> ElementFrame {
        let value = self.entrance.value();
        ElementFrame {
            opacity: value,
            offset_rows: ENTRANCE_OFFSET_ROWS * (1.0 - value),
        }
    }

    /// The rows currently in view.
    pub fn visible_lines(&self) -> Vec<Line<'static>> {
        self.build_layout().visible_lines(
            self.scroll.offset(),
            self.scroll.viewport_height(),
            &self.reveal,
            self.theme.palette(),
            self.entrance_frame(),
        )
    }

    // ---- scrolling ------------------------------------------------------

    pub fn scroll_lines(&mut self, delta: i32) -> bool {
        let moved = self.scroll.scroll_by(delta);
        if moved {
            self.observe();
        }
        moved
    }

    pub fn scroll_pages(&mut self, pages: i32) -> bool {
        let page = self
            .scroll
            .viewport_height()
            .saturating_sub(self.navigation.page_overlap_rows())
            .max(1);
        self.scroll_lines(pages * i32::from(page))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        let moved = self.scroll.jump_to(0);
        self.observe();
        moved
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        let moved = self.scroll.jump_to(self.scroll.max_offset());
        self.observe();
        moved
    }

    /// Smooth scroll to a section's first row.
    pub fn jump_to(&mut self, id: SectionId) {
        let Some(span) = self.layout.section_span(id) else {
            return;
        };
        log::debug!("Scrolling to {id} at row {}", span.top);
        self.scroll.scroll_to(span.top);
        self.observe();
    }

    pub fn next_section(&mut self) {
        self.jump_to(self.active_section().next());
    }

    pub fn previous_section(&mut self) {
        self.jump_to(self.active_section().previous());
    }

    pub fn back_to_top(&mut self) {
        self.scroll.scroll_to(0);
        self.observe();
    }

    // ---- interaction ----------------------------------------------------

    pub fn next_project(&mut self) {
        self.interaction.next_project(self.content.projects.items.len());
    }

    pub fn previous_project(&mut self) {
        self.interaction
            .previous_project(self.content.projects.items.len());
    }

    pub fn toggle_experience(&mut self) {
        self.interaction.toggle_experience();
        self.relayout();
        self.observe();
    }

    pub fn next_experience(&mut self) {
        self.interaction.next_experience(self.content.experience.len());
        self.relayout();
        self.observe();
    }

    pub fn previous_experience(&mut self) {
        self.interaction
            .previous_experience(self.content.experience.len());
        self.relayout();
        self.observe();
    }

    fn selected_project(&self) -> Option<&server::content::Project> {
        self.content
            .projects
            .items
            .get(self.interaction.selected_project)
    }

    pub fn demo_url(&self) -> Option<String> {
        self.selected_project()?.demo_url.clone()
    }

    pub fn source_url(&self) -> Option<String> {
        self.selected_project()?.source_url.clone()
    }

    pub fn all_projects_url(&self) -> Option<String> {
        self.content.projects.all_projects_url.clone()
    }

    pub fn cv_url(&self) -> Option<String> {
        self.content.profile.cv_url.clone()
    }

    pub fn email(&self) -> &str {
        &self.content.profile.email
    }

    // ---- theme ----------------------------------------------------------

    pub fn toggle_theme(&mut self) -> AppResult<ThemePreference> {
        self.theme.toggle()
    }

    // ---- contact form ---------------------------------------------------

    pub fn open_contact(&mut self) {
        self.form = ContactFormState {
            open: true,
            focus: ContactField::Name,
        };
    }

    pub fn close_contact(&mut self) {
        self.form.open = false;
    }

    pub fn focus_next(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    pub fn type_char(&mut self, ch: char) -> bool {
        let field = self.form.focus;
        let mut value = self.contact.draft().get(field).to_string();
        value.push(ch);
        self.contact.edit(field, value)
    }

    pub fn backspace(&mut self) -> bool {
        let field = self.form.focus;
        let mut value = self.contact.draft().get(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.contact.edit(field, value)
    }

    /// Validate and start a submission. Invalid drafts move focus to the
    /// first field with an error.
    pub fn submit_contact(&mut self) -> Option<SubmissionTicket> {
        match self.contact.begin_submit() {
            Ok(ticket) => Some(ticket),
            Err(SubmitError::Validation(errors)) => {
                if let Some(field) = ContactField::ALL
                    .into_iter()
                    .find(|field| errors.contains(*field))
                {
                    self.form.focus = field;
                }
                None
            }
            Err(error) => {
                log::debug!("Submit ignored: {error}");
                None
            }
        }
    }

    /// Apply the transport result for `ticket`.
    pub fn contact_delivered(
        &mut self,
        ticket: Uuid,
        result: Result<(), TransportError>,
        now: Instant,
    ) -> Option<SubmissionOutcome> {
        let outcome = self.contact.complete(ticket, result, now)?;
        match &outcome {
            SubmissionOutcome::Sent => {
                self.settle.trigger(self.settle_duration);
                self.push_toast(Toast::success(
                    "Message sent successfully!",
                    "I'll get back to you as soon as possible.",
                ));
            }
            SubmissionOutcome::Failed(_) => {
                self.push_toast(Toast::error(
                    "Failed to send message",
                    format!(
                        "Please try again later or contact me directly via email at {}.",
                        self.content.profile.email
                    ),
                ));
            }
        }
        Some(outcome)
    }

    // ---- toasts ---------------------------------------------------------

    pub fn push_toast(&mut self, toast: Toast) {
        let toast = if toast.duration == crate::components::toast::DEFAULT_TOAST_DURATION {
            toast.with_duration(self.toast_duration)
        } else {
            toast
        };
        self.toasts.push(toast);
    }

    // ---- accessors ------------------------------------------------------

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn palette(&self) -> &Palette {
        self.theme.palette()
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn reveal(&self) -> &RevealEngine<RevealGroupId> {
        &self.reveal
    }

    pub fn counters(&self) -> &SkillCounters {
        &self.counters
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn active_section(&self) -> SectionId {
        self.active.active().unwrap_or(SectionId::Home)
    }

    pub fn contact(&self) -> &ContactFlow {
        &self.contact
    }

    pub fn submission(&self) -> SubmissionState {
        self.contact.state()
    }

    pub fn form(&self) -> ContactFormState {
        self.form
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    /// Navbar rows currently slid into view.
    pub fn navbar_rows(&self) -> u16 {
        self.navbar.rows(NAVBAR_ROWS)
    }

    pub fn settle_frame(&self) -> ElementFrame {
        self.settle.frame()
    }

    pub fn is_animating(&self) -> bool {
        self.animate
            && (self.reveal.is_animating()
                || self.counters.is_counting()
                || self.settle.is_active()
                || self.navbar.is_moving()
                || self.scroll.is_smooth_scrolling()
                || !self.entrance.is_complete())
    }

    /// Stop every animation and leave the page fully shown.
    pub fn teardown(&mut self) {
        let released = self.reveal.teardown();
        log::debug!("Released {} reveal groups", released.len());
        for observed in &mut self.groups {
            observed.observer.disconnect();
        }
        self.section_observer.disconnect();
        self.counter_observer.disconnect();
    }
}
