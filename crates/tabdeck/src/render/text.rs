use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

use crate::theme::Theme;

/// Layout and paint wrapped text, returning the height used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font_id: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font_id, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Text with a bold lead-in, e.g. "Filtering: filter, take, skip".
#[allow(clippy::too_many_arguments)]
pub fn draw_labelled_text(
    ui: &egui::Ui,
    label: &str,
    text: &str,
    pos: Pos2,
    font_size: f32,
    label_color: Color32,
    color: Color32,
    max_width: f32,
) -> f32 {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    job.append(
        &format!("{label}: "),
        0.0,
        egui::text::TextFormat {
            font_id: FontId::new(font_size + 1.0, FontFamily::Proportional),
            color: label_color,
            ..Default::default()
        },
    );
    job.append(
        text,
        0.0,
        egui::text::TextFormat {
            font_id: FontId::new(font_size, FontFamily::Proportional),
            color,
            ..Default::default()
        },
    );
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Rounded pill with uppercase text. Returns its height.
pub fn draw_badge(
    ui: &egui::Ui,
    text: &str,
    theme: &Theme,
    pos: Pos2,
    opacity: f32,
    scale: f32,
) -> f32 {
    let color = Theme::with_opacity(theme.foreground, opacity);
    let bg = Theme::with_opacity(theme.secondary, opacity);
    let galley = ui.painter().layout_no_wrap(
        text.to_uppercase(),
        FontId::proportional(14.0 * scale),
        color,
    );
    let pad = egui::vec2(12.0 * scale, 4.0 * scale);
    let rect = egui::Rect::from_min_size(pos, galley.rect.size() + pad * 2.0);
    ui.painter().rect_filled(rect, rect.height() / 2.0, bg);
    ui.painter().galley(pos + pad, galley, color);
    rect.height()
}

/// Draw a code block with syntax highlighting. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_code_block(
    ui: &egui::Ui,
    code: &str,
    language: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let padding = 16.0 * scale;
    let bg_color = Theme::with_opacity(theme.code_background, opacity);
    let border = Theme::with_opacity(theme.border, opacity);

    let job = crate::render::syntax::highlight_code(
        code,
        language,
        theme.code_size * scale,
        opacity,
        theme,
        max_width - padding * 2.0,
    );
    let galley = ui.painter().layout_job(job);
    let total_height = galley.rect.height() + padding * 2.0;

    let bg_rect = egui::Rect::from_min_size(pos, egui::vec2(max_width, total_height));
    ui.painter().rect_filled(bg_rect, 8.0 * scale, bg_color);
    ui.painter().rect_stroke(
        bg_rect,
        8.0 * scale,
        egui::Stroke::new(1.0, border),
        egui::StrokeKind::Inside,
    );

    let fallback = Theme::with_opacity(theme.code_foreground, opacity);
    ui.painter()
        .galley(Pos2::new(pos.x + padding, pos.y + padding), galley, fallback);

    total_height
}
