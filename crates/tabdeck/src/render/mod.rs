pub mod chrome;
pub mod intro;
pub mod slide;
pub mod syntax;
pub mod text;
pub mod transition;

use eframe::egui;

use crate::deck::{Deck, Slide};
use crate::input::Control;
use crate::nav::Navigator;
use crate::theme::Theme;
use crate::view::ChromeView;

use transition::Entrance;

/// Height of the header strip, in reference pixels.
pub const HEADER_HEIGHT: f32 = 72.0;
/// Height reserved at the bottom for the navigation controls.
pub const CONTROLS_HEIGHT: f32 = 96.0;

/// Uniform scale against a 1920x1080 reference canvas.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

/// Screen regions of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regions {
    pub header: egui::Rect,
    pub body: egui::Rect,
    pub controls: egui::Rect,
}

impl Regions {
    pub fn split(rect: egui::Rect, scale: f32) -> Self {
        let header_bottom = rect.top() + HEADER_HEIGHT * scale;
        let controls_top = (rect.bottom() - CONTROLS_HEIGHT * scale).max(header_bottom);
        Self {
            header: egui::Rect::from_x_y_ranges(rect.x_range(), rect.top()..=header_bottom),
            body: egui::Rect::from_x_y_ranges(rect.x_range(), header_bottom..=controls_top),
            controls: egui::Rect::from_x_y_ranges(rect.x_range(), controls_top..=rect.bottom()),
        }
    }
}

/// Draw one full frame of the viewer: header, slide body and navigation
/// controls. Returns every control clicked this frame.
pub fn draw_viewer(
    ui: &egui::Ui,
    nav: &Navigator,
    theme: &Theme,
    rect: egui::Rect,
    entrance: &Entrance,
) -> Vec<Control> {
    let scale = compute_scale(rect);
    let regions = Regions::split(rect, scale);
    let view = ChromeView::from_navigator(nav);

    let mut clicked = chrome::draw_header(ui, &view, theme, regions.header, scale);

    let frame = entrance.frame();
    let body = regions
        .body
        .translate(egui::vec2(frame.offset_x * scale, 0.0));
    clicked.extend(render_body(
        ui,
        nav.deck(),
        nav.current_slide(),
        view.show_intro,
        theme,
        body,
        frame.opacity,
        entrance.elapsed(),
        scale,
    ));

    clicked.extend(chrome::draw_controls(ui, &view, theme, regions.controls, scale));
    clicked
}

/// Draw the current slide's content area. The introduction slide gets the
/// landing view; every other slide gets the regular layout.
#[allow(clippy::too_many_arguments)]
fn render_body(
    ui: &egui::Ui,
    deck: &Deck,
    slide: &Slide,
    show_intro: bool,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) -> Vec<Control> {
    if show_intro {
        intro::render(ui, deck, slide, theme, rect, opacity, elapsed, scale)
    } else {
        slide::render(ui, slide, theme, rect, opacity, elapsed, scale);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input;
    use crate::nav::NavEvent;
    use transition::TransitionKind;

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Run one headless viewer frame and return the events it produces.
    fn run_frame(
        ctx: &egui::Context,
        nav: &Navigator,
        events: Vec<egui::Event>,
    ) -> Vec<NavEvent> {
        let raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 720.0),
            )),
            events: events.clone(),
            ..Default::default()
        };
        let theme = Theme::light();
        let entrance = Entrance::settled(TransitionKind::None);
        let mut clicked = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = draw_viewer(ui, nav, &theme, ui.max_rect(), &entrance);
            });
        });
        input::ordered_events(&input::frame_inputs(&events), &clicked)
    }

    fn dispatch_all(nav: &mut Navigator, events: Vec<NavEvent>) -> Vec<NavEvent> {
        for &event in &events {
            nav.dispatch(event);
        }
        events
    }

    #[test]
    fn test_tab_key_does_not_focus_controls() {
        let ctx = egui::Context::default();
        let mut nav = Navigator::new(Deck::builtin());

        for forward in [egui::Key::Space, egui::Key::Enter] {
            let before = nav.global_position();
            let idle = run_frame(&ctx, &nav, vec![]);
            assert!(dispatch_all(&mut nav, idle).is_empty());
            let tab = run_frame(&ctx, &nav, vec![key(egui::Key::Tab)]);
            assert!(dispatch_all(&mut nav, tab).is_empty());

            let pressed = run_frame(&ctx, &nav, vec![key(forward)]);
            let events = dispatch_all(&mut nav, pressed);
            assert_eq!(events, vec![NavEvent::Next]);
            assert_eq!(nav.global_position(), before + 1);
        }
    }

    #[test]
    fn test_clicking_next_button_advances_once() {
        let ctx = egui::Context::default();
        let mut nav = Navigator::new(Deck::builtin());
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 720.0));
        let scale = compute_scale(rect);
        let controls = Regions::split(rect, scale).controls;
        let radius = 22.0 * scale;
        let next = egui::pos2(
            controls.right() - 32.0 * scale - radius,
            controls.bottom() - 24.0 * scale - radius,
        );
        let button = |pressed| egui::Event::PointerButton {
            pos: next,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };

        let hover = run_frame(&ctx, &nav, vec![egui::Event::PointerMoved(next)]);
        dispatch_all(&mut nav, hover);
        let press = run_frame(&ctx, &nav, vec![button(true)]);
        dispatch_all(&mut nav, press);
        let release = run_frame(&ctx, &nav, vec![button(false)]);
        let events = dispatch_all(&mut nav, release);
        assert_eq!(events, vec![NavEvent::Next]);
        assert_eq!(nav.global_position(), 1);
    }

    #[test]
    fn test_scale_uses_limiting_axis() {
        let full_hd = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        assert_eq!(compute_scale(full_hd), 1.0);
        let wide = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(3840.0, 1080.0));
        assert_eq!(compute_scale(wide), 1.0);
        let small = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 720.0));
        assert!((compute_scale(small) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_regions_tile_the_window() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        let regions = Regions::split(rect, 1.0);
        assert_eq!(regions.header.top(), 0.0);
        assert_eq!(regions.header.bottom(), regions.body.top());
        assert_eq!(regions.body.bottom(), regions.controls.top());
        assert_eq!(regions.controls.bottom(), 1080.0);
        assert_eq!(regions.header.height(), HEADER_HEIGHT);
        assert_eq!(regions.controls.height(), CONTROLS_HEIGHT);
    }

    #[test]
    fn test_regions_in_tiny_window() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 100.0));
        let regions = Regions::split(rect, 1.0);
        assert!(regions.body.height() >= 0.0);
        assert_eq!(regions.controls.bottom(), 100.0);
    }
}
