use super::{Block, RenderContext, column, key_hint, wrapped_lines};
use server::content::{PortfolioContent, Profile, SocialLink};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

/// Page footer. Not a navigation target, so it has no section id.
pub struct Footer {
    profile: Profile,
    socials: Vec<SocialLink>,
}

impl Footer {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            profile: content.profile.clone(),
            socials: content.socials.clone(),
        }
    }

    pub fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (_, inner) = column(ctx.width);
        let rule = "─".repeat(usize::from(ctx.width));

        let mut lines = vec![
            Line::from(Span::styled(rule, Style::default().fg(palette.border))),
            Line::default(),
            Line::from(Span::styled(
                self.profile.name.clone(),
                Style::default()
                    .fg(palette.primary_accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ];
        lines.extend(
            wrapped_lines(
                &self.profile.headline,
                inner,
                0,
                Style::default().fg(palette.text_muted),
            )
            .into_iter()
            .map(Line::centered),
        );
        lines.push(Line::default());

        if !self.socials.is_empty() {
            lines.push(
                Line::from(Span::styled(
                    "Connect With Me",
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
            for social in &self.socials {
                lines.push(
                    Line::from(Span::styled(
                        format!("{} {}", social.label, social.url),
                        Style::default().fg(palette.text_muted),
                    ))
                    .centered(),
                );
            }
            lines.push(Line::default());
        }

        lines.push(
            Line::from(Span::styled(
                format!("© {} {}. All rights reserved.", ctx.year, self.profile.name),
                Style::default().fg(palette.text_muted),
            ))
            .centered(),
        );
        lines.push(
            Line::from(key_hint(
                &ctx.keys.back_to_top().to_string(),
                "Back to Top ↑",
                palette,
            ))
            .centered(),
        );
        lines.push(Line::default());

        vec![Block::new(lines)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealEngine;
    use crate::sections::testing::{Fixture, text};

    #[test]
    fn test_footer_carries_year_and_back_to_top() {
        let content = PortfolioContent::embedded().unwrap();
        let fixture = Fixture::new();
        let engine = RevealEngine::new(false);
        let lines: Vec<String> = Footer::new(&content)
            .blocks(&fixture.context(&engine))
            .iter()
            .flat_map(|b| b.lines.iter().map(text))
            .collect();

        assert!(lines.iter().any(|l| l.contains("© 2026") && l.contains(&content.profile.name)));
        assert!(lines.iter().any(|l| l.contains("[g] Back to Top")));
        assert!(lines.iter().any(|l| l.contains("Connect With Me")));
    }
}
