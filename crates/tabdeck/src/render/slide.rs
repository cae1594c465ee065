use eframe::egui::{self, FontId, Pos2};

use crate::deck::{Block, Bullet, Practice, Slide};
use crate::render::text;
use crate::render::transition::{ELEMENT_DURATION, ELEMENT_LIFT, element_progress};
use crate::theme::Theme;

/// Per-element delays, in seconds after the slide starts entering.
const SUBTITLE_DELAY: f32 = 0.1;
const BLOCK_DELAY: f32 = 0.2;
const CODE_DELAY: f32 = 0.3;
const ITEM_STAGGER: f32 = 0.1;

/// Shared per-frame drawing parameters.
struct Frame<'a> {
    ui: &'a egui::Ui,
    theme: &'a Theme,
    opacity: f32,
    elapsed: f32,
    scale: f32,
}

impl Frame<'_> {
    /// Opacity and downward offset for an element appearing after `delay`.
    fn reveal(&self, delay: f32) -> (f32, f32) {
        let p = element_progress(self.elapsed, delay, ELEMENT_DURATION);
        (self.opacity * p, (1.0 - p) * ELEMENT_LIFT * self.scale)
    }
}

/// Render a regular (non-introduction) slide.
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) {
    let frame = Frame {
        ui,
        theme,
        opacity,
        elapsed,
        scale,
    };
    let content = rect.shrink2(egui::vec2(96.0 * scale, 40.0 * scale));
    let x = content.left();
    let mut y = content.top();

    if let Some(badge) = slide.badge {
        let (alpha, lift) = frame.reveal(0.0);
        y += text::draw_badge(ui, badge, theme, Pos2::new(x, y + lift), alpha, scale);
        y += 16.0 * scale;
    }

    let (alpha, lift) = frame.reveal(0.0);
    y += text::draw_text(
        ui,
        slide.title,
        Pos2::new(x, y + lift),
        FontId::proportional(theme.title_size * scale),
        Theme::with_opacity(theme.heading_color, alpha),
        content.width(),
    );
    y += 16.0 * scale;

    let (alpha, lift) = frame.reveal(SUBTITLE_DELAY);
    y += text::draw_text(
        ui,
        slide.subtitle,
        Pos2::new(x, y + lift),
        FontId::proportional(theme.subtitle_size * scale),
        Theme::with_opacity(theme.muted, alpha),
        content.width() * 0.7,
    );
    y += 40.0 * scale;

    let groups = split_groups(&slide.blocks);
    if groups.len() == 2 {
        let gap = 48.0 * scale;
        let column = (content.width() - gap) / 2.0;
        for (col, group) in groups.iter().enumerate() {
            let left = x + col as f32 * (column + gap);
            let delay = BLOCK_DELAY + col as f32 * ITEM_STAGGER;
            draw_blocks(&frame, group, Pos2::new(left, y), column, delay);
        }
    } else {
        draw_blocks(&frame, &slide.blocks, Pos2::new(x, y), content.width(), BLOCK_DELAY);
    }
}

/// Split blocks into runs that each start at a section heading. Blocks
/// before the first heading form their own run.
pub fn split_groups(blocks: &[Block]) -> Vec<&[Block]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (i, block) in blocks.iter().enumerate() {
        if matches!(block, Block::Section { .. }) && i > start {
            groups.push(&blocks[start..i]);
            start = i;
        }
    }
    if start < blocks.len() {
        groups.push(&blocks[start..]);
    }
    groups
}

fn draw_blocks(frame: &Frame<'_>, blocks: &[Block], pos: Pos2, width: f32, delay: f32) -> f32 {
    let spacing = 20.0 * frame.scale;
    let mut y = pos.y;
    for block in blocks {
        y += draw_block(frame, block, Pos2::new(pos.x, y), width, delay) + spacing;
    }
    y - pos.y
}

fn draw_block(frame: &Frame<'_>, block: &Block, pos: Pos2, width: f32, delay: f32) -> f32 {
    let (ui, theme, scale) = (frame.ui, frame.theme, frame.scale);
    match block {
        Block::Section { title } => {
            let (alpha, lift) = frame.reveal(delay);
            text::draw_text(
                ui,
                title,
                Pos2::new(pos.x, pos.y + lift),
                FontId::proportional(theme.section_size * scale),
                Theme::with_opacity(theme.heading_color, alpha),
                width,
            )
        }
        Block::Code { language, source } => {
            let (alpha, lift) = frame.reveal(delay.max(CODE_DELAY));
            text::draw_code_block(
                ui,
                source,
                language,
                theme,
                Pos2::new(pos.x, pos.y + lift),
                width,
                alpha,
                scale,
            )
        }
        Block::Bullets { items } => draw_bullets(frame, items, pos, width, delay),
        Block::Practices { items } => draw_practices(frame, items, pos, width, delay),
    }
}

fn draw_bullets(frame: &Frame<'_>, items: &[Bullet], pos: Pos2, width: f32, delay: f32) -> f32 {
    let (ui, theme, scale) = (frame.ui, frame.theme, frame.scale);
    let font_size = theme.body_size * scale;
    let marker_width = 28.0 * scale;
    let mut y = pos.y;

    for (i, item) in items.iter().enumerate() {
        let (alpha, lift) = frame.reveal(delay + i as f32 * ITEM_STAGGER / 2.0);
        let muted = Theme::with_opacity(theme.muted, alpha);
        let top = y + lift;

        ui.painter().text(
            Pos2::new(pos.x, top),
            egui::Align2::LEFT_TOP,
            "\u{2022}",
            FontId::proportional(font_size),
            muted,
        );
        let text_pos = Pos2::new(pos.x + marker_width, top);
        let text_width = width - marker_width;
        let height = match item.label {
            Some(label) => text::draw_labelled_text(
                ui,
                label,
                item.text,
                text_pos,
                font_size,
                Theme::with_opacity(theme.foreground, alpha),
                muted,
                text_width,
            ),
            None => text::draw_text(
                ui,
                item.text,
                text_pos,
                FontId::proportional(font_size),
                muted,
                text_width,
            ),
        };
        y += height + 10.0 * scale;
    }
    y - pos.y
}

/// Practice cards in a two-column grid.
fn draw_practices(
    frame: &Frame<'_>,
    items: &[Practice],
    pos: Pos2,
    width: f32,
    delay: f32,
) -> f32 {
    let gap = 40.0 * frame.scale;
    let column = (width - gap) / 2.0;
    let mut y = pos.y;

    for (row, pair) in items.chunks(2).enumerate() {
        let mut row_height: f32 = 0.0;
        for (col, practice) in pair.iter().enumerate() {
            let index = row * 2 + col;
            let x = pos.x + col as f32 * (column + gap);
            let item_delay = delay + index as f32 * ITEM_STAGGER;
            let h = draw_practice(frame, practice, Pos2::new(x, y), column, item_delay);
            row_height = row_height.max(h);
        }
        y += row_height + 32.0 * frame.scale;
    }
    y - pos.y
}

fn draw_practice(
    frame: &Frame<'_>,
    practice: &Practice,
    pos: Pos2,
    width: f32,
    delay: f32,
) -> f32 {
    let (ui, theme, scale) = (frame.ui, frame.theme, frame.scale);
    let p = element_progress(frame.elapsed, delay, ELEMENT_DURATION);
    let alpha = frame.opacity * p;
    // Practices slide in from the right rather than rising.
    let x = pos.x + (1.0 - p) * ELEMENT_LIFT * scale;

    let icon_size = 28.0 * scale;
    let accent = Theme::with_opacity(theme.accent, alpha);
    ui.painter().circle_stroke(
        Pos2::new(x + icon_size / 2.0, pos.y + icon_size / 2.0 + 4.0 * scale),
        icon_size / 2.0,
        egui::Stroke::new(2.5 * scale, accent),
    );

    let text_x = x + icon_size + 16.0 * scale;
    let text_width = width - icon_size - 16.0 * scale;
    let title_h = text::draw_text(
        ui,
        practice.title,
        Pos2::new(text_x, pos.y),
        FontId::proportional((theme.body_size + 2.0) * scale),
        Theme::with_opacity(theme.foreground, alpha),
        text_width,
    );
    let desc_h = text::draw_text(
        ui,
        practice.description,
        Pos2::new(text_x, pos.y + title_h + 6.0 * scale),
        FontId::proportional(theme.body_size * 0.85 * scale),
        Theme::with_opacity(theme.muted, alpha),
        text_width,
    );
    title_h + 6.0 * scale + desc_h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, Topic};

    #[test]
    fn test_split_groups_at_sections() {
        let deck = Deck::builtin();
        let slide = deck.slide_at(Topic::TypeScript, 1).unwrap();
        let groups = split_groups(&slide.blocks);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| matches!(g[0], Block::Section { .. })));
        assert_eq!(groups[0].len() + groups[1].len(), slide.blocks.len());
    }

    #[test]
    fn test_split_groups_without_sections() {
        let deck = Deck::builtin();
        let slide = deck.slide_at(Topic::RxJs, 0).unwrap();
        let groups = split_groups(&slide.blocks);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_split_groups_leading_blocks() {
        let blocks = vec![
            Block::Code {
                language: "js",
                source: "x",
            },
            Block::Section { title: "A" },
            Block::Code {
                language: "js",
                source: "y",
            },
        ];
        let groups = split_groups(&blocks);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[1].len(), 2);
        assert!(split_groups(&[]).is_empty());
    }
}
