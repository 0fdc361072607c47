//! # Sections
//!
//! The page is a vertical stack of sections. Each one turns its slice of the
//! portfolio content into [`Block`]s of styled lines and declares, up front,
//! which reveal groups its blocks belong to. [`page::PageLayout`] stacks the
//! blocks, records where every section and group ended up and later applies
//! the animation frames while rendering.
//!
//! Block heights never depend on animation state, so the layout only changes
//! on resize or when the experience accordion opens or closes.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod page;
pub mod projects;
pub mod skills;

use crate::config::{AnimationConfig, KeyBindingsConfig};
use crate::motion::{RevealEngine, RevealSpec, SkillCounters};
use crate::theme::Palette;
use crate::viewport::{ObserveMode, Trigger};
use server::contact::SubmissionState;
use server::content::PortfolioContent;
use std::fmt;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Start line of the section entrance, "top of section at 80% of the viewport".
pub const SECTION_START_LINE: f32 = 0.8;
/// Start line of the about cards and the experience timeline.
pub const CARD_START_LINE: f32 = 0.7;
/// Widest text column, wider terminals get side margins.
pub const MAX_COLUMN_WIDTH: u16 = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|id| *id == self).unwrap_or(0)
    }

    /// `1`..`6` on the keyboard.
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealGroupId {
    /// The generic entrance of a section's content
    Section(SectionId),
    HeroTitle,
    AboutCards,
    ProjectCards,
    ExperienceItems,
    ExperienceLine,
}

impl RevealGroupId {
    /// Section whose rows the group falls back to when no block refers to it.
    pub fn section(self) -> SectionId {
        match self {
            RevealGroupId::Section(id) => id,
            RevealGroupId::HeroTitle => SectionId::Home,
            RevealGroupId::AboutCards => SectionId::About,
            RevealGroupId::ProjectCards => SectionId::Projects,
            RevealGroupId::ExperienceItems | RevealGroupId::ExperienceLine => {
                SectionId::Experience
            }
        }
    }
}

/// Element `index` of group `group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealRef {
    pub group: RevealGroupId,
    pub index: usize,
}

/// A run of lines that moves and fades as one element.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub lines: Vec<Line<'static>>,
    pub reveal: Option<RevealRef>,
}

impl Block {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            reveal: None,
        }
    }

    pub fn spacer(rows: usize) -> Self {
        Self::new(vec![Line::default(); rows])
    }

    pub fn revealed(mut self, group: RevealGroupId, index: usize) -> Self {
        self.reveal = Some(RevealRef { group, index });
        self
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

/// A reveal timeline together with the observer rule that drives it.
#[derive(Debug, Clone, Copy)]
pub struct RevealGroup {
    pub id: RevealGroupId,
    pub trigger: Trigger,
    pub mode: ObserveMode,
    pub spec: RevealSpec,
}

impl RevealGroup {
    /// The standard section entrance: repeating, reversed when scrolling back up.
    pub fn section(id: SectionId, count: usize, animation: &AnimationConfig) -> Self {
        Self {
            id: RevealGroupId::Section(id),
            trigger: Trigger::StartLine(SECTION_START_LINE),
            mode: ObserveMode::Repeating,
            spec: RevealSpec::new(
                count,
                animation.reveal_duration(),
                animation.stagger(),
                f32::from(animation.offset_rows()),
            ),
        }
    }
}

/// Selection state of the interactive parts of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub selected_project: usize,
    pub experience_cursor: usize,
    pub expanded_experience: Option<usize>,
}

impl Interaction {
    /// The first experience item starts expanded.
    pub fn new(experience_count: usize) -> Self {
        Self {
            selected_project: 0,
            experience_cursor: 0,
            expanded_experience: (experience_count > 0).then_some(0),
        }
    }

    pub fn next_project(&mut self, count: usize) {
        if count > 0 {
            self.selected_project = (self.selected_project + 1) % count;
        }
    }

    pub fn previous_project(&mut self, count: usize) {
        if count > 0 {
            self.selected_project = (self.selected_project + count - 1) % count;
        }
    }

    /// Open the item under the cursor, or close it when it is the open one.
    pub fn toggle_experience(&mut self) {
        self.expanded_experience = if self.expanded_experience == Some(self.experience_cursor) {
            None
        } else {
            Some(self.experience_cursor)
        };
    }

    /// Move the cursor and open the item it lands on.
    pub fn next_experience(&mut self, count: usize) {
        if count > 0 {
            self.experience_cursor = (self.experience_cursor + 1) % count;
            self.expanded_experience = Some(self.experience_cursor);
        }
    }

    pub fn previous_experience(&mut self, count: usize) {
        if count > 0 {
            self.experience_cursor = (self.experience_cursor + count - 1) % count;
            self.expanded_experience = Some(self.experience_cursor);
        }
    }
}

/// Everything a section needs to produce its lines.
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub width: u16,
    pub reveal: &'a RevealEngine<RevealGroupId>,
    pub counters: &'a SkillCounters,
    pub interaction: &'a Interaction,
    pub keys: &'a KeyBindingsConfig,
    pub submission: SubmissionState,
    pub year: i32,
}

pub trait Section {
    fn id(&self) -> SectionId;

    /// Reveal groups this section's blocks refer to.
    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup>;

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block>;
}

/// The six sections in page order.
pub fn build_sections(content: &PortfolioContent) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(hero::Hero::new(content)),
        Box::new(about::About::new(content)),
        Box::new(skills::Skills::new(content)),
        Box::new(projects::Projects::new(content)),
        Box::new(experience::Experience::new(content)),
        Box::new(contact::Contact::new(content)),
    ]
}

/// Badge, title and accent bar shared by every section but the hero.
pub fn section_header(badge: &str, title: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {badge} "),
            Style::default()
                .fg(palette.primary_accent)
                .bg(palette.surface),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "━━━━━━━━",
            Style::default().fg(palette.primary_accent),
        ))
        .centered(),
    ]
}

/// `[k] label` hint.
pub fn key_hint(key: &str, label: &str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{key}]"), Style::default().fg(palette.shortcut_key)),
        Span::styled(
            format!(" {label}"),
            Style::default().fg(palette.shortcut_description),
        ),
    ]
}

/// Rounded box `width` columns wide (border included) around `body`.
pub fn boxed(
    title: &str,
    body: Vec<Line<'static>>,
    width: u16,
    indent: usize,
    border: Style,
    title_style: Style,
) -> Vec<Line<'static>> {
    let width = usize::from(width.max(6));
    let pad = " ".repeat(indent);
    let title_width = title.width().min(width.saturating_sub(6));
    let title: String = truncate(title, title_width);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled("╭─ ", border),
        Span::styled(title, title_style),
        Span::styled(
            format!(" {}╮", "─".repeat(width.saturating_sub(5 + title_width))),
            border,
        ),
    ]));

    let inner = width - 4;
    for line in body {
        let fill = inner.saturating_sub(line.width());
        let mut spans = vec![Span::raw(pad.clone()), Span::styled("│ ", border)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(fill)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::raw(pad),
        Span::styled(format!("╰{}╯", "─".repeat(width - 2)), border),
    ]));
    lines
}

/// First `columns` terminal columns of `text`.
pub fn truncate(text: &str, columns: usize) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + ch.to_string().width() > columns {
            break;
        }
        out.push(ch);
    }
    out
}

/// Greedy word wrap measured in terminal columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word.width() <= width {
            current.push_str(word);
        } else {
            // Hard-break words longer than a line
            for ch in word.chars() {
                if current.width() + ch.to_string().width() > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left margin and width of the centred text column for a terminal `width`.
pub fn column(width: u16) -> (usize, u16) {
    let inner = width.saturating_sub(4).clamp(1, MAX_COLUMN_WIDTH);
    (usize::from(width.saturating_sub(inner) / 2), inner)
}

/// `text` wrapped to `width` columns, each line padded by `indent`.
pub fn wrapped_lines(text: &str, width: u16, indent: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap(text, usize::from(width))
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{pad}{line}"), style)))
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::theme::ThemePreference;
    use std::time::Duration;

    pub fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    /// Owned render inputs for section tests.
    pub struct Fixture {
        pub palette: Palette,
        pub counters: SkillCounters,
        pub interaction: Interaction,
        pub keys: KeyBindingsConfig,
        pub submission: SubmissionState,
        pub width: u16,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                palette: Palette::fallback(ThemePreference::Light),
                counters: SkillCounters::new(Vec::new(), Duration::from_millis(15), false),
                interaction: Interaction::new(0),
                keys: KeyBindingsConfig::default(),
                submission: SubmissionState::Idle,
                width: 80,
            }
        }

        pub fn context<'a>(&'a self, engine: &'a RevealEngine<RevealGroupId>) -> RenderContext<'a> {
            RenderContext {
                palette: &self.palette,
                width: self.width,
                reveal: engine,
                counters: &self.counters,
                interaction: &self.interaction,
                keys: &self.keys,
                submission: self.submission,
                year: 2026,
            }
        }

        /// Plain text of every line the section renders.
        pub fn render(&self, section: &dyn Section) -> Vec<String> {
            let engine = RevealEngine::new(false);
            section
                .blocks(&self.context(&engine))
                .iter()
                .flat_map(|block| block.lines.iter().map(text))
                .collect()
        }
    }
}
