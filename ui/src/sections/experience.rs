use super::{
    Block, CARD_START_LINE, RenderContext, RevealGroup, RevealGroupId, Section, SectionId, column,
    key_hint, section_header, wrap,
};
use crate::config::AnimationConfig;
use crate::motion::{RevealSpec, linear};
use crate::viewport::{ObserveMode, Trigger};
use server::content::{ExperienceItem, PortfolioContent};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

/// Rail, marker and gap before the item text.
const RAIL_COLUMNS: usize = 4;

/// Timeline accordion. At most one item is expanded.
pub struct Experience {
    items: Vec<ExperienceItem>,
}

/// One row of an item before the rail is drawn.
struct Row {
    marker: bool,
    spans: Vec<Span<'static>>,
}

impl Experience {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            items: content.experience.clone(),
        }
    }

    fn item_rows(&self, index: usize, ctx: &RenderContext<'_>, text_width: u16) -> Vec<Row> {
        let palette = ctx.palette;
        let item = &self.items[index];
        let expanded = ctx.interaction.expanded_experience == Some(index);
        let focused = ctx.interaction.experience_cursor == index;

        let role_style = if focused {
            Style::default()
                .fg(palette.selection_fg)
                .bg(palette.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        };
        let chevron = if expanded { "▾ " } else { "▸ " };
        let logo = item.logo.as_deref().unwrap_or("◆");

        let mut rows = vec![
            Row {
                marker: true,
                spans: vec![
                    Span::styled(chevron, Style::default().fg(palette.primary_accent)),
                    Span::styled(format!("{logo} "), Style::default().fg(palette.secondary_accent)),
                    Span::styled(item.role.clone(), role_style),
                ],
            },
            Row {
                marker: false,
                spans: vec![
                    Span::raw("  "),
                    Span::styled(
                        item.company.clone(),
                        Style::default().fg(palette.primary_accent),
                    ),
                    Span::styled(
                        format!("  ·  {}", item.period),
                        Style::default().fg(palette.text_muted),
                    ),
                ],
            },
        ];

        if expanded {
            if !item.location.is_empty() {
                rows.push(Row {
                    marker: false,
                    spans: vec![Span::styled(
                        format!("  ⌖ {}", item.location),
                        Style::default().fg(palette.text_muted),
                    )],
                });
            }
            for highlight in &item.highlights {
                let wrapped = wrap(highlight, usize::from(text_width.saturating_sub(4)));
                for (i, line) in wrapped.into_iter().enumerate() {
                    let bullet = if i == 0 { "  • " } else { "    " };
                    rows.push(Row {
                        marker: false,
                        spans: vec![
                            Span::styled(bullet, Style::default().fg(palette.secondary_accent)),
                            Span::styled(line, Style::default().fg(palette.text_primary)),
                        ],
                    });
                }
            }
        }

        rows.push(Row {
            marker: false,
            spans: Vec::new(),
        });
        rows
    }
}

impl Section for Experience {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        vec![
            RevealGroup::section(SectionId::Experience, 2, animation),
            RevealGroup {
                id: RevealGroupId::ExperienceItems,
                trigger: Trigger::StartLine(CARD_START_LINE),
                mode: ObserveMode::Repeating,
                spec: RevealSpec::new(
                    self.items.len(),
                    animation.experience_duration(),
                    animation.experience_stagger(),
                    f32::from(animation.offset_rows()),
                ),
            },
            RevealGroup {
                id: RevealGroupId::ExperienceLine,
                trigger: Trigger::StartLine(CARD_START_LINE),
                mode: ObserveMode::Repeating,
                // The line grows at a constant rate as it scrolls in
                spec: RevealSpec::new(1, animation.timeline_line(), std::time::Duration::ZERO, 0.0)
                    .with_easing(linear),
            },
        ]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (indent, inner) = column(ctx.width);
        let text_width = inner.saturating_sub(RAIL_COLUMNS as u16);
        let group = RevealGroupId::Section(SectionId::Experience);

        let mut header = section_header("Career Path", "Work Experience", palette);
        header.push(Line::default());
        let mut blocks = vec![Block::spacer(2), Block::new(header).revealed(group, 0)];

        let items: Vec<Vec<Row>> = (0..self.items.len())
            .map(|i| self.item_rows(i, ctx, text_width))
            .collect();
        let total_rows: usize = items.iter().map(Vec::len).sum();
        // The rail grows downwards with the timeline line progress
        let drawn = (ctx.reveal.progress(RevealGroupId::ExperienceLine, 0) * total_rows as f32)
            .round() as usize;

        let pad = " ".repeat(indent);
        let mut row_index = 0;
        for (i, rows) in items.into_iter().enumerate() {
            let mut lines = Vec::with_capacity(rows.len());
            for row in rows {
                let rail = match (row.marker, row_index < drawn) {
                    (true, _) => Span::styled(" ● ", Style::default().fg(palette.primary_accent)),
                    (false, true) => Span::styled(" │ ", Style::default().fg(palette.border)),
                    (false, false) => Span::raw("   "),
                };
                let mut spans = vec![Span::raw(pad.clone()), rail, Span::raw(" ")];
                spans.extend(row.spans);
                lines.push(Line::from(spans));
                row_index += 1;
            }
            blocks.push(Block::new(lines).revealed(RevealGroupId::ExperienceItems, i));
        }

        let mut hints = Vec::new();
        hints.extend(key_hint(
            &format!("{}/{}", ctx.keys.prev_experience(), ctx.keys.next_experience()),
            "Move",
            palette,
        ));
        hints.push(Span::raw("   "));
        hints.extend(key_hint(
            &ctx.keys.toggle_experience().to_string(),
            "Expand/Collapse",
            palette,
        ));
        blocks.push(Block::new(vec![Line::from(hints).centered(), Line::default()]).revealed(group, 1));
        blocks.push(Block::spacer(1));
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealEngine;
    use crate::sections::Interaction;
    use crate::sections::testing::{Fixture, text};
    use std::time::Duration;

    fn fixture(content: &PortfolioContent) -> Fixture {
        let mut fixture = Fixture::new();
        fixture.interaction = Interaction::new(content.experience.len());
        fixture
    }

    #[test]
    fn test_first_item_is_expanded_initially() {
        let content = PortfolioContent::embedded().unwrap();
        let lines = fixture(&content).render(&Experience::new(&content));

        // Highlights wrap to the column width, so match their opening words
        let opening = |text: &str| text.chars().take(24).collect::<String>();
        let first = &content.experience[0];
        let second = &content.experience[1];
        assert!(lines.iter().any(|l| l.contains(&opening(&first.highlights[0]))));
        assert!(!lines.iter().any(|l| l.contains(&opening(&second.highlights[0]))));
        assert!(lines.iter().any(|l| l.contains(&format!("▾ {}", first.logo.as_deref().unwrap()))));
    }

    #[test]
    fn test_collapsing_shrinks_the_item() {
        let content = PortfolioContent::embedded().unwrap();
        let experience = Experience::new(&content);
        let engine = RevealEngine::new(false);
        let mut fixture = fixture(&content);

        let item_height = |fixture: &Fixture| {
            experience
                .blocks(&fixture.context(&engine))
                .iter()
                .find(|b| {
                    b.reveal.is_some_and(|r| {
                        r.group == RevealGroupId::ExperienceItems && r.index == 0
                    })
                })
                .map(Block::height)
                .unwrap()
        };

        let expanded = item_height(&fixture);
        fixture.interaction.toggle_experience();
        assert_eq!(fixture.interaction.expanded_experience, None);
        assert_eq!(item_height(&fixture), 3);
        assert!(expanded > 3);
    }

    #[test]
    fn test_rail_follows_line_progress() {
        let content = PortfolioContent::embedded().unwrap();
        let experience = Experience::new(&content);
        let fixture = fixture(&content);
        let animation = AnimationConfig::default();

        let mut engine = RevealEngine::new(true);
        for group in experience.reveal_groups(&animation) {
            engine.register(group.id, group.spec);
        }
        let rails = |engine: &RevealEngine<RevealGroupId>| {
            experience
                .blocks(&fixture.context(engine))
                .iter()
                .flat_map(|b| b.lines.iter().map(text))
                .filter(|l| l.contains(" │ "))
                .count()
        };

        assert_eq!(rails(&engine), 0);
        engine.reveal(RevealGroupId::ExperienceLine, true);
        engine.tick(Duration::from_secs(5));
        assert!(rails(&engine) > 0);
    }
}
