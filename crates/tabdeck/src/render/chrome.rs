//! Header with the slide counter and topic tabs, and the bottom bar with
//! previous/next buttons around the progress track.

use eframe::egui::{self, FontId, Pos2};

use crate::input::Control;
use crate::theme::Theme;
use crate::view::ChromeView;

const DISABLED_OPACITY: f32 = 0.3;

/// Clickable but never focusable: Space and Enter stay global navigation
/// keys instead of activating a focused control.
pub const CONTROL_SENSE: egui::Sense = egui::Sense::CLICK;

/// Draw the header strip. Returns clicked tabs.
pub fn draw_header(
    ui: &egui::Ui,
    view: &ChromeView,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Vec<Control> {
    let painter = ui.painter();
    let font = FontId::proportional(theme.chrome_size * scale);
    let pad_x = 24.0 * scale;

    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        egui::Stroke::new(1.0 * scale, theme.border),
    );

    let label = painter.layout_no_wrap(view.label.clone(), font.clone(), theme.muted);
    let label_pos = Pos2::new(
        rect.left() + pad_x,
        rect.center().y - label.rect.height() / 2.0,
    );
    painter.galley(label_pos, label, theme.muted);

    let tab_pad = egui::vec2(16.0 * scale, 8.0 * scale);
    let tab_gap = 4.0 * scale;
    let galleys: Vec<_> = view
        .tabs
        .iter()
        .map(|tab| {
            let color = if tab.active { theme.foreground } else { theme.muted };
            painter.layout_no_wrap(tab.label.to_string(), font.clone(), color)
        })
        .collect();
    let row_width: f32 = galleys
        .iter()
        .map(|g| g.rect.width() + tab_pad.x * 2.0)
        .sum::<f32>()
        + tab_gap * galleys.len().saturating_sub(1) as f32;

    let mut x = rect.center().x - row_width / 2.0;
    let mut clicked = Vec::new();
    for (tab, galley) in view.tabs.iter().zip(galleys) {
        let size = galley.rect.size() + tab_pad * 2.0;
        let tab_rect = egui::Rect::from_min_size(Pos2::new(x, rect.center().y - size.y / 2.0), size);
        x += size.x + tab_gap;

        let response = ui
            .interact(tab_rect, ui.id().with(("tab", tab.topic.id())), CONTROL_SENSE)
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if tab.active {
            painter.rect_filled(tab_rect, 6.0 * scale, theme.secondary);
        } else if response.hovered() {
            painter.rect_filled(tab_rect, 6.0 * scale, Theme::with_opacity(theme.secondary, 0.5));
        }
        let color = if tab.active || response.hovered() {
            theme.foreground
        } else {
            theme.muted
        };
        painter.galley(tab_rect.min + tab_pad, galley, color);

        if response.clicked() {
            clicked.push(Control::Tab(tab.topic));
        }
    }
    clicked
}

/// Draw the previous/next buttons and the progress track. Returns clicked
/// buttons; disabled buttons never report a click.
pub fn draw_controls(
    ui: &egui::Ui,
    view: &ChromeView,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Vec<Control> {
    let radius = 22.0 * scale;
    let pad_x = 32.0 * scale;
    let cy = rect.bottom() - 24.0 * scale - radius;
    let mut clicked = Vec::new();

    let prev_center = Pos2::new(rect.left() + pad_x + radius, cy);
    if nav_button(ui, "prev", prev_center, radius, view.previous_enabled, false, theme, scale) {
        clicked.push(Control::PreviousButton);
    }
    let next_center = Pos2::new(rect.right() - pad_x - radius, cy);
    if nav_button(ui, "next", next_center, radius, view.next_enabled, true, theme, scale) {
        clicked.push(Control::NextButton);
    }

    let track_width = rect.width() / 2.0;
    let track_height = 4.0 * scale;
    let track = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, cy),
        egui::vec2(track_width, track_height),
    );
    let painter = ui.painter();
    painter.rect_filled(track, track_height / 2.0, theme.secondary);
    let fill = egui::Rect::from_min_size(
        track.min,
        egui::vec2(view.progress_width(track_width), track_height),
    );
    if fill.width() > 0.0 {
        painter.rect_filled(fill, track_height / 2.0, theme.accent);
    }

    clicked
}

#[allow(clippy::too_many_arguments)]
fn nav_button(
    ui: &egui::Ui,
    id: &str,
    center: Pos2,
    radius: f32,
    enabled: bool,
    pointing_right: bool,
    theme: &Theme,
    scale: f32,
) -> bool {
    let rect = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
    let sense = if enabled {
        CONTROL_SENSE
    } else {
        egui::Sense::hover()
    };
    let mut response = ui.interact(rect, ui.id().with(("nav-button", id)), sense);
    if enabled {
        response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    let opacity = if enabled { 1.0 } else { DISABLED_OPACITY };
    if enabled {
        let bg = if response.hovered() {
            Theme::with_opacity(theme.secondary, 0.8)
        } else {
            theme.secondary
        };
        painter.circle_filled(center, radius, bg);
    }

    let arm = 6.0 * scale;
    let dir = if pointing_right { 1.0 } else { -1.0 };
    let tip = Pos2::new(center.x + dir * arm / 2.0, center.y);
    let stroke = egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.foreground, opacity));
    painter.line_segment([Pos2::new(tip.x - dir * arm, tip.y - arm), tip], stroke);
    painter.line_segment([Pos2::new(tip.x - dir * arm, tip.y + arm), tip], stroke);

    enabled && response.clicked()
}
