use super::{
    Block, RenderContext, RevealGroup, RevealGroupId, Section, SectionId, column, section_header,
    truncate,
};
use crate::config::AnimationConfig;
use crate::theme::Palette;
use server::content::{PortfolioContent, Skill, SkillGroup};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const NAME_COLUMNS: usize = 16;
/// Icon, spaces, brackets and the percentage.
const BAR_CHROME: usize = 4 + NAME_COLUMNS + 3 + 5;

pub struct Skills {
    groups: Vec<SkillGroup>,
}

impl Skills {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            groups: content.skill_groups.clone(),
        }
    }
}

/// `◆ HTML/CSS         [█████████░] 99%`
fn skill_bar(skill: &Skill, value: u8, ratio: f32, width: usize, indent: usize, palette: &Palette) -> Line<'static> {
    let bar_width = width.saturating_sub(BAR_CHROME).max(4);
    let filled = ((ratio.clamp(0.0, 1.0) * bar_width as f32).round() as usize).min(bar_width);
    let icon = skill.icon.as_deref().unwrap_or("•");
    let name = truncate(&skill.name, NAME_COLUMNS);
    let name_pad = NAME_COLUMNS.saturating_sub(name.width());

    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(format!("{icon} "), Style::default().fg(palette.secondary_accent)),
        Span::styled(
            format!("{name}{} ", " ".repeat(name_pad)),
            Style::default().fg(palette.text_primary),
        ),
        Span::styled("[", Style::default().fg(palette.border)),
        Span::styled("█".repeat(filled), Style::default().fg(palette.bar_fill)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(palette.bar_track),
        ),
        Span::styled("]", Style::default().fg(palette.border)),
        Span::styled(
            format!("{value:>4}%"),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

impl Section for Skills {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        vec![RevealGroup::section(
            SectionId::Skills,
            1 + self.groups.len(),
            animation,
        )]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (indent, inner) = column(ctx.width);
        let group = RevealGroupId::Section(SectionId::Skills);

        let mut header = section_header("My Skills", "Technical Expertise", palette);
        header.push(Line::default());
        let mut blocks = vec![Block::spacer(2), Block::new(header).revealed(group, 0)];

        // Counters are indexed over all skills in page order
        let mut skill_index = 0;
        for (i, skill_group) in self.groups.iter().enumerate() {
            let mut lines = vec![Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    skill_group.title.clone(),
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];
            lines.push(Line::default());

            for skill in &skill_group.skills {
                let (value, ratio) = ctx
                    .counters
                    .get(skill_index)
                    .map_or((0, 0.0), |counter| (counter.value(), counter.ratio()));
                lines.push(skill_bar(
                    skill,
                    value,
                    ratio,
                    usize::from(inner),
                    indent,
                    palette,
                ));
                skill_index += 1;
            }
            lines.push(Line::default());
            blocks.push(Block::new(lines).revealed(group, i + 1));
        }

        blocks.push(Block::spacer(1));
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::SkillCounters;
    use crate::sections::testing::{Fixture, text};
    use std::time::Duration;

    fn rust() -> Skill {
        Skill {
            name: "Rust".to_string(),
            level: 60,
            icon: Some("⚙".to_string()),
        }
    }

    #[test]
    fn test_bar_fills_with_the_counter() {
        let palette = Fixture::new().palette;
        let empty = text(&skill_bar(&rust(), 0, 0.0, 40, 0, &palette));
        let full = text(&skill_bar(&rust(), 100, 1.0, 40, 0, &palette));

        assert!(empty.contains("[░░░░░░░░░░░░]"));
        assert!(empty.ends_with("   0%"));
        assert!(full.contains("[████████████]"));
        assert_eq!(empty.width(), full.width());
    }

    #[test]
    fn test_skill_rows_read_their_own_counter() {
        let content = PortfolioContent::embedded().unwrap();
        let mut fixture = Fixture::new();
        fixture.counters = SkillCounters::new(
            content.skills().map(|s| s.level),
            Duration::from_millis(15),
            false,
        );
        fixture.counters.start_all();

        let lines = fixture.render(&Skills::new(&content));
        for skill in content.skills() {
            let row = lines
                .iter()
                .find(|l| l.contains(&skill.name))
                .expect("skill row");
            assert!(row.ends_with(&format!("{:>4}%", skill.level)));
        }
    }
}
