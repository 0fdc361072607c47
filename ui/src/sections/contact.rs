use super::{
    Block, RenderContext, RevealGroup, RevealGroupId, Section, SectionId, column, key_hint,
    section_header, wrapped_lines,
};
use crate::config::AnimationConfig;
use server::contact::SubmissionState;
use server::content::{PortfolioContent, Profile};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

/// Contact channels, availability and the entry point to the message form.
pub struct Contact {
    profile: Profile,
}

impl Contact {
    pub fn new(content: &PortfolioContent) -> Self {
        Self {
            profile: content.profile.clone(),
        }
    }

    fn channels(&self) -> Vec<(&'static str, &'static str, String)> {
        let mut channels = vec![("✉", "Email", self.profile.email.clone())];
        if let Some(phone) = &self.profile.phone {
            channels.push(("☎", "Phone", phone.clone()));
        }
        channels.push(("⌖", "Location", self.profile.location.clone()));
        channels
    }
}

impl Section for Contact {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn reveal_groups(&self, animation: &AnimationConfig) -> Vec<RevealGroup> {
        let availability = usize::from(self.profile.availability.is_some());
        vec![RevealGroup::section(
            SectionId::Contact,
            3 + availability,
            animation,
        )]
    }

    fn blocks(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let palette = ctx.palette;
        let (indent, inner) = column(ctx.width);
        let pad = " ".repeat(indent);
        let group = RevealGroupId::Section(SectionId::Contact);
        let mut index = 0;
        let mut next = || {
            index += 1;
            index - 1
        };

        let mut header = section_header("Get In Touch", "Contact Me", palette);
        header.push(Line::default());
        let mut blocks = vec![Block::spacer(2), Block::new(header).revealed(group, next())];

        let heading = Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD);
        let mut info = vec![
            Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled("Contact Information", heading),
            ]),
            Line::default(),
        ];
        for (icon, label, value) in self.channels() {
            let mut spans = vec![
                Span::raw(pad.clone()),
                Span::styled(format!("{icon} "), Style::default().fg(palette.primary_accent)),
                Span::styled(format!("{label:<10}"), Style::default().fg(palette.text_muted)),
                Span::styled(value, Style::default().fg(palette.text_primary)),
            ];
            if label == "Email" {
                spans.push(Span::raw("   "));
                spans.extend(key_hint(&ctx.keys.copy_email().to_string(), "copy", palette));
            }
            info.push(Line::from(spans));
        }
        info.push(Line::default());
        blocks.push(Block::new(info).revealed(group, next()));

        if let Some(availability) = &self.profile.availability {
            let mut lines = vec![Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled("Availability", heading),
            ])];
            lines.extend(wrapped_lines(
                availability,
                inner,
                indent,
                Style::default().fg(palette.text_muted),
            ));
            lines.push(Line::default());
            blocks.push(Block::new(lines).revealed(group, next()));
        }

        let prompt = match ctx.submission {
            SubmissionState::Sent { .. } => Line::from(Span::styled(
                "✓ Message sent, thank you!",
                Style::default()
                    .fg(palette.status_success)
                    .add_modifier(Modifier::BOLD),
            )),
            SubmissionState::Submitting => Line::from(Span::styled(
                "Sending...",
                Style::default().fg(palette.status_info),
            )),
            SubmissionState::Idle | SubmissionState::Failed => {
                let mut spans = vec![Span::styled(
                    "Press ",
                    Style::default().fg(palette.text_muted),
                )];
                spans.extend(key_hint("Enter", "or", palette));
                spans.push(Span::raw(" "));
                spans.extend(key_hint(
                    &ctx.keys.contact().to_string(),
                    "to write me a message",
                    palette,
                ));
                Line::from(spans)
            }
        };
        blocks.push(
            Block::new(vec![Line::default(), prompt.centered(), Line::default()])
                .revealed(group, next()),
        );
        blocks.push(Block::spacer(2));
        blocks
    }
}
