use super::{
    Block, RenderContext, RevealGroup, RevealGroupId, SECTION_START_LINE, Section, SectionId,
    boxed, column, key_hint, section_header, wrapped_lines,
};
use crate::config::AnimationConfig;
use crate::motion::RevealSpec;
use crate::viewport::{ObserveMode, Trigger};
use server::content::{PortfolioContent, Project, ProjectGallery};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

pub struct Projects {
    gallery: ProjectGallery,
}

impl Projects {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            gallery: content.projects.clone(),
        }
    }

    fn card(&self, project: &Project, selected: bool, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let (indent, inner) = column(ctx.width);
        let body_width = inner.saturating_sub(4);

        let mut body = wrapped_lines(
            &project.description,
            body_width,
            0,
            Style::default().fg(palette.text_muted),
        );
        if !project.tags.is_empty() {
            let mut tags = Vec::new();
            for tag in &project.tags {
                tags.push(Span::styled(
                    format!(" {tag} "),
                    Style::default()
                        .fg(palette.primary_accent)
                        .bg(palette.surface),
                ));
                tags.push(Span::raw(" "));
            }
            body.push(Line::default());
            body.push(Line::from(tags));
        }

        if selected {
            let mut links = Vec::new();
            if project.demo_url.is_some() {
                links.extend(key_hint(&ctx.keys.open_demo().to_string(), "Live Demo", palette));
                links.push(Span::raw("   "));
            }
            if project.source_url.is_some() {
                links.extend(key_hint(&ctx.keys.open_source().to_string(), "Code", palette));
            }
            body.push(Line::default());
            body.push(Line::from(links));
        } else {
            // Keep every card the same height whether selected or not
            body.push(Line::default());
            body.push(Line::default());
        }

        let (border, title) = if selected {
            (
                Style::default().fg(palette.primary_accent),
                Style::default()
                    .fg(palette.selection_fg)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(palette.border),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut lines = boxed(&project.title, body, inner, indent, border, title);
        lines.push(Line::default());
        lines
    }
}

impl Section for Projects {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        vec![
            RevealGroup::section(SectionId::Projects, 2, animation),
            RevealGroup {
                id: RevealGroupId::ProjectCards,
                trigger: Trigger::StartLine(SECTION_START_LINE),
                mode: ObserveMode::Repeating,
                spec: RevealSpec::new(
                    self.gallery.items.len(),
                    animation.card_duration(),
                    animation.stagger(),
                    f32::from(animation.offset_rows()),
                ),
            },
        ]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let group = RevealGroupId::Section(SectionId::Projects);

        let mut header = section_header("My Work", "Featured Projects", palette);
        header.push(Line::default());
        let mut blocks = vec![Block::spacer(2), Block::new(header).revealed(group, 0)];

        for (i, project) in self.gallery.items.iter().enumerate() {
            let selected = i == ctx.interaction.selected_project;
            blocks.push(
                Block::new(self.card(project, selected, ctx)).revealed(RevealGroupId::ProjectCards, i),
            );
        }

        let mut footer = vec![Span::styled(
            format!("{} projects  ", self.gallery.items.len()),
            Style::default().fg(palette.text_muted),
        )];
        footer.extend(key_hint(
            &format!("{}/{}", ctx.keys.prev_project(), ctx.keys.next_project()),
            "Select",
            palette,
        ));
        if self.gallery.all_projects_url.is_some() {
            footer.push(Span::raw("   "));
            footer.extend(key_hint(
                &ctx.keys.all_projects().to_string(),
                "View All Projects",
                palette,
            ));
        }
        blocks.push(Block::new(vec![Line::from(footer).centered(), Line::default()]).revealed(group, 1));
        blocks.push(Block::spacer(1));
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealEngine;
    use crate::sections::testing::Fixture;

    #[test]
    fn test_only_the_selected_card_shows_links() {
        let content = PortfolioContent::embedded().unwrap();
        let projects = Projects::new(&content);
        let mut fixture = Fixture::new();

        let lines = fixture.render(&projects);
        assert_eq!(lines.iter().filter(|l| l.contains("Live Demo")).count(), 1);

        fixture.interaction.next_project(content.projects.items.len());
        let lines = fixture.render(&projects);
        assert_eq!(lines.iter().filter(|l| l.contains("Live Demo")).count(), 1);
        assert!(lines.iter().any(|l| l.contains("View All Projects")));
    }

    #[test]
    fn test_selection_does_not_change_heights() {
        let content = PortfolioContent::embedded().unwrap();
        let projects = Projects::new(&content);
        let engine = RevealEngine::new(false);
        let mut fixture = Fixture::new();

        let before: Vec<u16> = projects
            .blocks(&fixture.context(&engine))
            .iter()
            .map(Block::height)
            .collect();
        fixture.interaction.previous_project(content.projects.items.len());
        let after: Vec<u16> = projects
            .blocks(&fixture.context(&engine))
            .iter()
            .map(Block::height)
            .collect();
        assert_eq!(before, after);
    }
}
