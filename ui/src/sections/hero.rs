use super::{
    Block, RenderContext, RevealGroup, RevealGroupId, Section, SECTION_START_LINE, SectionId,
    column, key_hint, wrapped_lines,
};
use crate::config::AnimationConfig;
use crate::motion::RevealSpec;
use crate::viewport::{ObserveMode, Trigger};
use server::content::{PortfolioContent, Profile, SocialLink};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Staggered blocks under the title: badge, tagline, socials, hints.
const CONTENT_BLOCKS: usize = 4;

/// Landing section with the per-character title reveal.
pub struct Hero {
    profile: Profile,
    socials: Vec<SocialLink>,
}

impl Hero {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            profile: content.profile.clone(),
            socials: content.socials.clone(),
        }
    }

    fn title_chars(&self) -> usize {
        self.profile.name.chars().count()
    }

    /// One row per possible shift, each character placed on the row of its
    /// current frame.
    fn title_lines(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let rows = usize::from(title_drop_rows(ctx)) + 1;
        let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new(); rows];

        for (index, ch) in self.profile.name.chars().enumerate() {
            let frame = ctx.reveal.frame(RevealGroupId::HeroTitle, index);
            let row = usize::from(frame.shift()).min(rows - 1);
            let style = Style::default()
                .fg(ctx.palette.fade(ctx.palette.primary_accent, frame.opacity))
                .add_modifier(Modifier::BOLD);
            let blank = " ".repeat(ch.width().unwrap_or(1));

            for (r, spans) in lines.iter_mut().enumerate() {
                if r == row {
                    spans.push(Span::styled(ch.to_string(), style));
                } else {
                    spans.push(Span::raw(blank.clone()));
                }
            }
        }

        lines
            .into_iter()
            .map(|spans| Line::from(spans).centered())
            .collect()
    }
}

/// Rows the hero title drops in from.
fn title_drop_rows(ctx: &RenderContext<'_>) -> u16 {
    ctx.reveal
        .timeline(RevealGroupId::HeroTitle)
        .map_or(0, |timeline| timeline.spec().offset_rows.max(0.0).round() as u16)
}

impl Section for Hero {
    fn id(&self) -> SectionId {
        SectionId::Home
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        let mut content = RevealGroup::section(SectionId::Home, CONTENT_BLOCKS, animation);
        content.spec = content.spec.with_delay(animation.hero_delay());

        vec![
            RevealGroup {
                id: RevealGroupId::HeroTitle,
                trigger: Trigger::StartLine(SECTION_START_LINE),
                mode: ObserveMode::Once,
                spec: RevealSpec::new(
                    self.title_chars(),
                    animation.hero_duration(),
                    animation.hero_char_stagger(),
                    f32::from(animation.offset_rows()),
                )
                .with_delay(animation.hero_delay()),
            },
            content,
        ]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (_, inner) = column(ctx.width);
        let group = RevealGroupId::Section(SectionId::Home);

        let badge = Block::new(vec![
            Line::from(Span::styled(
                format!(" {} ", self.profile.headline),
                Style::default()
                    .fg(palette.secondary_accent)
                    .bg(palette.surface),
            ))
            .centered(),
            Line::default(),
        ])
        .revealed(group, 0);

        let mut tagline_lines: Vec<Line<'static>> = wrapped_lines(
            &self.profile.tagline,
            inner,
            0,
            Style::default().fg(palette.text_muted),
        )
        .into_iter()
        .map(Line::centered)
        .collect();
        tagline_lines.push(Line::default());
        let tagline = Block::new(tagline_lines).revealed(group, 1);

        let mut social_spans = Vec::new();
        for (i, social) in self.socials.iter().enumerate() {
            if i > 0 {
                social_spans.push(Span::styled(
                    "  ·  ",
                    Style::default().fg(palette.border),
                ));
            }
            social_spans.push(Span::styled(
                social.label.clone(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        social_spans.push(Span::styled(
            "  ·  ",
            Style::default().fg(palette.border),
        ));
        social_spans.push(Span::styled(
            self.profile.email.clone(),
            Style::default().fg(palette.text_primary),
        ));
        let socials = Block::new(vec![Line::from(social_spans).centered(), Line::default()])
            .revealed(group, 2);

        let mut hint_spans = Vec::new();
        if self.profile.cv_url.is_some() {
            hint_spans.extend(key_hint(&ctx.keys.open_cv().to_string(), "Download CV", palette));
            hint_spans.push(Span::raw("    "));
        }
        hint_spans.extend(key_hint("2", "About Me", palette));
        hint_spans.push(Span::raw("    "));
        hint_spans.extend(key_hint(&ctx.keys.contact().to_string(), "Contact", palette));
        let hints = Block::new(vec![
            Line::from(hint_spans).centered(),
            Line::default(),
            Line::from(Span::styled("▾", Style::default().fg(palette.text_muted))).centered(),
        ])
        .revealed(group, 3);

        vec![
            Block::spacer(3),
            badge,
            Block::new(self.title_lines(ctx)),
            Block::spacer(1),
            tagline,
            socials,
            hints,
            Block::spacer(2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealEngine;
    use crate::sections::testing::{Fixture, text};
    use std::time::Duration;

    #[test]
    fn test_title_characters_drop_into_place() {
        let content = PortfolioContent::embedded().unwrap();
        let hero = Hero::new(&content);
        let name = content.profile.name.clone();
        let fixture = Fixture::new();

        let mut engine = RevealEngine::new(true);
        engine.register(
            RevealGroupId::HeroTitle,
            RevealSpec::new(name.chars().count(), Duration::from_millis(100), Duration::ZERO, 2.0),
        );

        // Not yet played: every character sits on the lowest row
        let lines = hero.title_lines(&fixture.context(&engine));
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[2]), name);
        assert!(text(&lines[0]).trim().is_empty());

        engine.reveal(RevealGroupId::HeroTitle, true);
        engine.tick(Duration::from_millis(200));
        let lines = hero.title_lines(&fixture.context(&engine));
        assert_eq!(text(&lines[0]), name);
        assert!(text(&lines[2]).trim().is_empty());
    }

    #[test]
    fn test_block_heights_do_not_depend_on_playback() {
        let content = PortfolioContent::embedded().unwrap();
        let hero = Hero::new(&content);
        let fixture = Fixture::new();
        let animation = AnimationConfig::default();

        let mut engine = RevealEngine::new(true);
        for group in hero.reveal_groups(&animation) {
            engine.register(group.id, group.spec);
        }
        let heights = |engine: &RevealEngine<RevealGroupId>| -> Vec<u16> {
            hero.blocks(&fixture.context(engine))
                .iter()
                .map(Block::height)
                .collect()
        };

        let before = heights(&engine);
        engine.reveal(RevealGroupId::HeroTitle, true);
        engine.tick(Duration::from_millis(300));
        assert_eq!(before, heights(&engine));
    }
}
