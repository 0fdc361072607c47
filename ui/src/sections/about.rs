use super::{
    Block, CARD_START_LINE, RenderContext, RevealGroup, RevealGroupId, Section, SectionId, boxed,
    column, key_hint, section_header, wrapped_lines,
};
use crate::config::AnimationConfig;
use crate::motion::RevealSpec;
use crate::viewport::{ObserveMode, Trigger};
use server::content::{self, PortfolioContent};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

pub struct About {
    about: content::About,
    has_cv: bool,
}

impl About {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            about: content.about.clone(),
            has_cv: content.profile.cv_url.is_some(),
        }
    }

    /// Header, heading, one per paragraph and the resume hint.
    fn content_blocks(&self) -> usize {
        2 + self.about.paragraphs.len() + usize::from(self.has_cv)
    }
}

impl Section for About {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        vec![
            RevealGroup::section(SectionId::About, self.content_blocks(), animation),
            RevealGroup {
                id: RevealGroupId::AboutCards,
                trigger: Trigger::StartLine(CARD_START_LINE),
                mode: ObserveMode::Repeating,
                spec: RevealSpec::new(
                    self.about.cards.len(),
                    animation.card_duration(),
                    animation.stagger(),
                    f32::from(animation.offset_rows()),
                ),
            },
        ]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (indent, inner) = column(ctx.width);
        let group = RevealGroupId::Section(SectionId::About);
        let mut index = 0;
        let mut next = || {
            index += 1;
            index - 1
        };

        let mut header = section_header("About Me", "Who I Am", palette);
        header.push(Line::default());
        let mut blocks = vec![Block::spacer(2), Block::new(header).revealed(group, next())];

        let mut heading = wrapped_lines(
            &self.about.heading,
            inner,
            indent,
            Style::default()
                .fg(palette.secondary_accent)
                .add_modifier(Modifier::BOLD),
        );
        heading.push(Line::default());
        blocks.push(Block::new(heading).revealed(group, next()));

        for paragraph in &self.about.paragraphs {
            let mut lines = wrapped_lines(
                paragraph,
                inner,
                indent,
                Style::default().fg(palette.text_primary),
            );
            lines.push(Line::default());
            blocks.push(Block::new(lines).revealed(group, next()));
        }

        let border = Style::default().fg(palette.border);
        let title = Style::default()
            .fg(palette.primary_accent)
            .add_modifier(Modifier::BOLD);
        for (i, card) in self.about.cards.iter().enumerate() {
            let body = wrapped_lines(
                &card.detail,
                inner.saturating_sub(4),
                0,
                Style::default().fg(palette.text_muted),
            );
            blocks.push(
                Block::new(boxed(&card.title, body, inner, indent, border, title))
                    .revealed(RevealGroupId::AboutCards, i),
            );
        }

        if self.has_cv {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            spans.extend(key_hint(
                &ctx.keys.open_cv().to_string(),
                "Download Resume",
                palette,
            ));
            blocks.push(
                Block::new(vec![Line::default(), Line::from(spans)]).revealed(group, next()),
            );
        }

        blocks.push(Block::spacer(2));
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealEngine;
    use crate::sections::page::PageLayout;
    use crate::sections::testing::Fixture;

    #[test]
    fn test_every_content_block_has_its_own_index() {
        let content = PortfolioContent::embedded().unwrap();
        let about = About::new(&content);
        let fixture = Fixture::new();
        let engine = RevealEngine::new(false);
        let blocks = about.blocks(&fixture.context(&engine));

        let mut indices: Vec<usize> = blocks
            .iter()
            .filter_map(|b| b.reveal)
            .filter(|r| r.group == RevealGroupId::Section(SectionId::About))
            .map(|r| r.index)
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..about.content_blocks()).collect::<Vec<_>>());

        let cards = blocks
            .iter()
            .filter(|b| b.reveal.is_some_and(|r| r.group == RevealGroupId::AboutCards))
            .count();
        assert_eq!(cards, content.about.cards.len());
    }

    #[test]
    fn test_cards_span_only_their_rows() {
        let content = PortfolioContent::embedded().unwrap();
        let about = About::new(&content);
        let fixture = Fixture::new();
        let engine = RevealEngine::new(false);
        let layout = PageLayout::build(
            vec![(SectionId::About, about.blocks(&fixture.context(&engine)))],
            Vec::new(),
        );

        let section = layout.section_span(SectionId::About).unwrap();
        let cards = layout.group_span(RevealGroupId::AboutCards).unwrap();
        assert!(cards.top > section.top);
        assert!(cards.bottom() < section.bottom());
    }

    #[test]
    fn test_renders_header_and_cards() {
        let content = PortfolioContent::embedded().unwrap();
        let lines = Fixture::new().render(&About::new(&content));
        assert!(lines.iter().any(|l| l.contains("Who I Am")));
        for card in &content.about.cards {
            assert!(lines.iter().any(|l| l.contains(&card.title)));
        }
    }
}
