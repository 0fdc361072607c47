use super::{Block, RevealGroupId, SectionId};
use crate::motion::{ElementFrame, RevealEngine};
use crate::theme::Palette;
use crate::viewport::Span;
use std::collections::HashMap;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::Line;

#[derive(Debug, Clone)]
struct PlacedBlock {
    top: u16,
    block: Block,
}

/// The whole page stacked top to bottom.
///
/// Built from the blocks of every section plus the trailing footer. Section
/// and group spans only depend on block heights, so the layout built for one
/// frame has the same geometry as the one built for the next.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    blocks: Vec<PlacedBlock>,
    sections: Vec<(SectionId, Span)>,
    groups: HashMap<RevealGroupId, Span>,
    height: u16,
}

impl PageLayout {
    pub fn build(sections: Vec<(SectionId, Vec<Block>)>, trailing: Vec<Block>) -> Self {
        let mut layout = PageLayout::default();
        let mut cursor: u16 = 0;

        for (id, blocks) in sections {
            let start = cursor;
            for block in blocks {
                cursor = layout.place(cursor, block);
            }
            layout
                .sections
                .push((id, Span::new(start, cursor.saturating_sub(start))));
        }
        for block in trailing {
            cursor = layout.place(cursor, block);
        }

        layout.height = cursor;
        layout
    }

    fn place(&mut self, top: u16, block: Block) -> u16 {
        let height = block.height();
        if let Some(reveal) = block.reveal {
            let span = Span::new(top, height);
            self.groups
                .entry(reveal.group)
                .and_modify(|existing| *existing = union(*existing, span))
                .or_insert(span);
        }
        self.blocks.push(PlacedBlock { top, block });
        top.saturating_add(height)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn section_span(&self, id: SectionId) -> Option<Span> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, span)| *span)
    }

    pub fn sections(&self) -> &[(SectionId, Span)] {
        &self.sections
    }

    /// Rows observed for a reveal group.
    ///
    /// Section groups watch the whole section. Other groups watch the rows of
    /// the blocks that refer to them, or their section when none do.
    pub fn group_span(&self, id: RevealGroupId) -> Option<Span> {
        match id {
            RevealGroupId::Section(section) => self.section_span(section),
            _ => self
                .groups
                .get(&id)
                .copied()
                .or_else(|| self.section_span(id.section())),
        }
    }

    /// The `height` rows starting at `offset`, with every block shifted and
    /// faded by its reveal frame combined with `base`.
    pub fn visible_lines(
        &self,
        offset: u16,
        height: u16,
        engine: &RevealEngine<RevealGroupId>,
        palette: &Palette,
        base: ElementFrame,
    ) -> Vec<Line<'static>> {
        let mut rows: Vec<Line<'static>> = vec![Line::default(); usize::from(height)];
        let window_end = u32::from(offset) + u32::from(height);

        for placed in &self.blocks {
            let block_top = u32::from(placed.top);
            let block_bottom = block_top + u32::from(placed.block.height());
            if block_bottom <= u32::from(offset) || block_top >= window_end {
                continue;
            }

            let frame = placed
                .block
                .reveal
                .map_or(ElementFrame::SHOWN, |r| engine.frame(r.group, r.index));
            let opacity = frame.opacity * base.opacity;
            let shift = u32::from(frame.shift()) + u32::from(base.shift());

            for page_row in block_top.max(u32::from(offset))..block_bottom.min(window_end) {
                // Rows pushed past the block's own height are clipped
                let Some(source_row) = (page_row - block_top).checked_sub(shift) else {
                    continue;
                };
                let Some(line) = placed.block.lines.get(source_row as usize) else {
                    continue;
                };
                let target = (page_row - u32::from(offset)) as usize;
                rows[target] = fade_line(line, opacity, palette);
            }
        }
        rows
    }
}

fn union(a: Span, b: Span) -> Span {
    let top = a.top.min(b.top);
    let bottom = a.bottom().max(b.bottom());
    Span::new(top, (bottom - u32::from(top)).min(u32::from(u16::MAX)) as u16)
}

/// Blend every colour of `line` towards the page background.
pub fn fade_line(line: &Line<'static>, opacity: f32, palette: &Palette) -> Line<'static> {
    if opacity >= 1.0 {
        return line.clone();
    }

    let mut faded = line.clone();
    let line_fg = line.style.fg.unwrap_or(palette.text_primary);
    faded.style = fade_style(line.style, line_fg, opacity, palette);
    for span in faded.spans.iter_mut() {
        let fg = span.style.fg.unwrap_or(line_fg);
        span.style = fade_style(span.style, fg, opacity, palette);
    }
    faded
}

fn fade_style(style: Style, fg: tuirealm::ratatui::style::Color, opacity: f32, palette: &Palette) -> Style {
    let mut style = style.fg(palette.fade(fg, opacity));
    if let Some(bg) = style.bg {
        style = style.bg(palette.fade(bg, opacity));
    }
    style
}
