use std::time::Instant;

use eframe::egui;

use crate::config::Config;
use crate::deck::{Deck, Topic};
use crate::input;
use crate::nav::{NavEvent, Navigator};
use crate::render;
use crate::render::transition::{Entrance, TransitionDirection, TransitionKind};
use crate::theme::Theme;

struct TabdeckApp {
    navigator: Navigator,
    theme: Theme,
    transition_kind: TransitionKind,
    entrance: Entrance,
    show_hud: bool,
    toast: Option<Toast>,
    last_ctrl_c: Option<Instant>,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    const DURATION: f32 = 1.5;
    const FADE_START: f32 = 1.0;

    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        toast_opacity(self.start.elapsed().as_secs_f32())
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= Self::DURATION
    }
}

fn toast_opacity(elapsed: f32) -> f32 {
    if elapsed < Toast::FADE_START {
        1.0
    } else if elapsed < Toast::DURATION {
        1.0 - (elapsed - Toast::FADE_START) / (Toast::DURATION - Toast::FADE_START)
    } else {
        0.0
    }
}

/// Forward when the new global position is at or after the old one.
fn direction_between(before: usize, after: usize) -> TransitionDirection {
    if after >= before {
        TransitionDirection::Forward
    } else {
        TransitionDirection::Backward
    }
}

impl TabdeckApp {
    fn new(navigator: Navigator, theme: Theme, transition_kind: TransitionKind) -> Self {
        Self {
            navigator,
            theme,
            transition_kind,
            entrance: Entrance::new(transition_kind, TransitionDirection::Forward),
            show_hud: false,
            toast: None,
            last_ctrl_c: None,
        }
    }

    /// Apply a navigation event. A change of slide restarts the entrance
    /// animation; input is never held back while one is running.
    fn navigate(&mut self, event: NavEvent) -> bool {
        let before = self.navigator.global_position();
        if !self.navigator.dispatch(event) {
            return false;
        }
        let direction = direction_between(before, self.navigator.global_position());
        self.entrance = Entrance::new(self.transition_kind, direction);
        true
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn cycle_transition(&mut self) {
        self.transition_kind = self.transition_kind.cycled();
        self.toast = Some(Toast::new(format!(
            "Transition: {}",
            self.transition_kind.name()
        )));
    }
}

impl eframe::App for TabdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut inputs: Vec<input::FrameInput> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // Ctrl+C double-tap to quit
            if i.modifiers.ctrl && i.key_pressed(egui::Key::C) {
                if let Some(last) = self.last_ctrl_c {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_ctrl_c = Some(Instant::now());
                self.toast = Some(Toast::new("Press Ctrl+C again to quit".to_string()));
                return;
            }

            if i.key_pressed(egui::Key::Escape) && self.show_hud {
                self.show_hud = false;
            }
            if i.key_pressed(egui::Key::F) {
                let fullscreen = i.viewport().fullscreen.unwrap_or(false);
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(!fullscreen));
            }
            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
            }
            if i.key_pressed(egui::Key::T) {
                self.cycle_transition();
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }

            inputs = input::frame_inputs(&i.events);
        });

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let mut clicked = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = render::compute_scale(rect);

                clicked = render::draw_viewer(ui, &self.navigator, &self.theme, rect, &self.entrance);

                if let Some(ref toast) = self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        draw_toast(ui, &toast.message, &self.theme, rect, opacity, scale);
                        ctx.request_repaint();
                    }
                }

                if self.show_hud {
                    draw_hud(ui, &self.theme, rect, scale);
                }
            });

        // Clicks hit the layout drawn from the pre-input state, which is
        // what the user saw when pressing.
        for event in input::ordered_events(&inputs, &clicked) {
            self.navigate(event);
        }

        if self.entrance.is_running() {
            ctx.request_repaint();
        }

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
    }
}

fn draw_toast(
    ui: &egui::Ui,
    message: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.code_background, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        message.to_string(),
        egui::FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - (render::CONTROLS_HEIGHT + 72.0) * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("\u{2192} / Space / Enter", "Next slide"),
        ("\u{2190}", "Previous slide"),
        ("Home", "First slide"),
        ("End", "Last slide"),
        ("Click tab / card", "Jump to topic"),
        ("T", "Cycle transition"),
        ("D", "Toggle theme"),
        ("F", "Toggle fullscreen"),
        ("H / Esc", "Toggle this HUD"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.code_background, 0.95);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 420.0 * scale;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        ui.painter().text(
            egui::pos2(hud_rect.left() + padding, y),
            egui::Align2::LEFT_TOP,
            key,
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter().text(
            egui::pos2(hud_rect.left() + padding + 200.0 * scale, y),
            egui::Align2::LEFT_TOP,
            desc,
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        y += line_height;
    }
}

/// Build the navigator at its starting slide. `--slide` (1-based, global)
/// and `--topic` override the configured start topic.
fn start_navigator(
    deck: Deck,
    topic: Option<Topic>,
    slide: Option<usize>,
    config_topic: Option<Topic>,
) -> anyhow::Result<Navigator> {
    let total = deck.total_slide_count();
    let mut navigator = Navigator::new(deck);

    if let Some(n) = slide {
        if n == 0 || navigator.seek(n - 1).is_err() {
            anyhow::bail!("Slide {n} is out of range. Must be between 1 and {total}.");
        }
        return Ok(navigator);
    }

    if let Some(topic) = topic.or(config_topic) {
        if !navigator.deck().contains(topic) {
            anyhow::bail!("Topic '{topic}' is not part of this presentation.");
        }
        navigator.jump_to_topic(topic);
    }
    Ok(navigator)
}

pub fn run(windowed: bool, topic: Option<Topic>, slide: Option<usize>) -> anyhow::Result<()> {
    let deck = Deck::builtin();
    let title = format!(
        "tabdeck \u{2014} {}",
        deck.slide_at(deck.first_topic(), 0)?.title
    );

    // CLI flags override config
    let config = Config::load_or_default();
    let theme = Theme::from_name(config.theme().unwrap_or("light"));
    let transition_kind = TransitionKind::from_name(config.transition().unwrap_or("slide"));
    let navigator = start_navigator(deck, topic, slide, config.start_topic())?;

    tracing::info!(
        topic = %navigator.current_topic(),
        slide = navigator.slide_index(),
        theme = %theme.name,
        transition = transition_kind.name(),
        "starting presentation"
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(TabdeckApp::new(navigator, theme, transition_kind)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TabdeckApp {
        TabdeckApp::new(
            Navigator::new(Deck::builtin()),
            Theme::light(),
            TransitionKind::SlideHorizontal,
        )
    }

    #[test]
    fn test_start_defaults_to_first_slide() {
        let nav = start_navigator(Deck::builtin(), None, None, None).unwrap();
        assert_eq!(nav.global_position(), 0);
        assert_eq!(nav.current_topic(), Topic::Intro);
    }

    #[test]
    fn test_start_flags_override_config() {
        let nav =
            start_navigator(Deck::builtin(), Some(Topic::RxJs), None, Some(Topic::TypeScript))
                .unwrap();
        assert_eq!(nav.current_topic(), Topic::RxJs);
        assert_eq!(nav.slide_index(), 0);

        let nav = start_navigator(Deck::builtin(), None, None, Some(Topic::Accessibility)).unwrap();
        assert_eq!(nav.current_topic(), Topic::Accessibility);

        let nav = start_navigator(Deck::builtin(), None, Some(8), Some(Topic::RxJs)).unwrap();
        assert_eq!(nav.global_position(), 7);
        assert_eq!(nav.current_topic(), Topic::Accessibility);
        assert_eq!(nav.slide_index(), 1);
    }

    #[test]
    fn test_start_slide_out_of_range() {
        for n in [0, 17] {
            let err = start_navigator(Deck::builtin(), None, Some(n), None).unwrap_err();
            assert!(err.to_string().contains("between 1 and 16"), "{err}");
        }
    }

    #[test]
    fn test_start_topic_missing_from_deck() {
        let deck = Deck::new(vec![(Topic::Intro, crate::deck::test_slides(2))]).unwrap();
        let err = start_navigator(deck, Some(Topic::RxJs), None, None).unwrap_err();
        assert!(err.to_string().contains("not part of this presentation"));
    }

    #[test]
    fn test_direction_follows_global_position() {
        assert_eq!(direction_between(3, 4), TransitionDirection::Forward);
        assert_eq!(direction_between(4, 3), TransitionDirection::Backward);
        assert_eq!(direction_between(5, 5), TransitionDirection::Forward);
    }

    #[test]
    fn test_navigate_reports_changes() {
        let mut app = app();
        assert!(!app.navigate(NavEvent::Previous));
        assert!(app.navigate(NavEvent::Next));
        assert_eq!(app.navigator.global_position(), 1);
        assert!(app.entrance.is_running());
        assert!(app.navigate(NavEvent::SelectTopic(Topic::RxJs)));
        assert!(!app.navigate(NavEvent::SelectTopic(Topic::RxJs)));
        assert_eq!(app.navigator.global_position(), 11);
    }

    #[test]
    fn test_navigation_is_not_blocked_by_running_entrance() {
        let mut app = app();
        for _ in 0..5 {
            assert!(app.navigate(NavEvent::Next));
        }
        assert_eq!(app.navigator.global_position(), 5);
    }

    #[test]
    fn test_toggles_show_toast() {
        let mut app = app();
        app.toggle_theme();
        assert_eq!(app.theme.name, "dark");
        assert_eq!(app.toast.as_ref().unwrap().message, "Theme: dark");
        app.cycle_transition();
        assert_eq!(app.transition_kind, TransitionKind::Fade);
        assert_eq!(app.toast.as_ref().unwrap().message, "Transition: fade");
    }

    #[test]
    fn test_toast_fades_out() {
        assert_eq!(toast_opacity(0.0), 1.0);
        assert!((toast_opacity(1.25) - 0.5).abs() < 1e-6);
        assert_eq!(toast_opacity(2.0), 0.0);
    }
}
