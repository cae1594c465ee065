//! Landing view for the introduction slide: a centred title block and one
//! clickable card per remaining topic.

use eframe::egui::{self, FontId, Pos2};

use crate::deck::{Deck, Slide, Topic};
use crate::input::Control;
use crate::render::chrome::CONTROL_SENSE;
use crate::render::transition::element_progress;
use crate::theme::Theme;

const INTRO_DURATION: f32 = 0.8;
const BADGE_DELAY: f32 = 0.2;
const TITLE_DELAY: f32 = 0.4;
const SUBTITLE_DELAY: f32 = 0.6;
const CARD_DURATION: f32 = 0.5;
const INTRO_LIFT: f32 = 20.0;

/// Seconds before the `index`th topic card starts appearing.
pub fn card_delay(index: usize) -> f32 {
    1.0 + index as f32 * 0.1
}

/// Topics that get a card: every topic in the deck except the introduction.
pub fn card_topics(deck: &Deck) -> Vec<Topic> {
    deck.topics_in_order()
        .iter()
        .copied()
        .filter(|&t| t != Topic::Intro)
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    deck: &Deck,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    elapsed: f32,
    scale: f32,
) -> Vec<Control> {
    let painter = ui.painter();
    let reveal = |delay: f32, duration: f32| {
        let p = element_progress(elapsed, delay, duration);
        (opacity * p, (1.0 - p) * INTRO_LIFT * scale)
    };

    let text_width = (rect.width() - 192.0 * scale).min(1100.0 * scale);
    let title_galley = painter.layout(
        slide.title.to_string(),
        FontId::proportional(theme.intro_title_size * scale),
        theme.heading_color,
        text_width,
    );
    let subtitle_galley = painter.layout(
        slide.subtitle.to_string(),
        FontId::proportional(theme.subtitle_size * scale),
        theme.muted,
        text_width * 0.75,
    );

    let topics = card_topics(deck);
    let card_size = egui::vec2(320.0 * scale, 120.0 * scale);
    let card_gap = 32.0 * scale;
    let badge_height = 30.0 * scale;
    let gap = 24.0 * scale;
    let cards_height = if topics.is_empty() { 0.0 } else { card_size.y };

    let total = badge_height
        + gap
        + title_galley.rect.height()
        + gap
        + subtitle_galley.rect.height()
        + gap * 2.0
        + cards_height;
    let mut y = rect.center().y - total / 2.0;
    let cx = rect.center().x;

    if let Some(badge) = slide.badge {
        let (alpha, lift) = reveal(BADGE_DELAY, INTRO_DURATION);
        let badge_width = badge_width(ui, badge, scale);
        crate::render::text::draw_badge(
            ui,
            badge,
            theme,
            Pos2::new(cx - badge_width / 2.0, y + lift),
            alpha,
            scale,
        );
    }
    y += badge_height + gap;

    let (alpha, lift) = reveal(TITLE_DELAY, INTRO_DURATION);
    let title_h = title_galley.rect.height();
    painter.galley(
        Pos2::new(cx - title_galley.rect.width() / 2.0, y + lift),
        title_galley,
        Theme::with_opacity(theme.heading_color, alpha),
    );
    y += title_h + gap;

    let (alpha, lift) = reveal(SUBTITLE_DELAY, INTRO_DURATION);
    let subtitle_h = subtitle_galley.rect.height();
    painter.galley(
        Pos2::new(cx - subtitle_galley.rect.width() / 2.0, y + lift),
        subtitle_galley,
        Theme::with_opacity(theme.muted, alpha),
    );
    y += subtitle_h + gap * 2.0;

    let row_width =
        topics.len() as f32 * card_size.x + topics.len().saturating_sub(1) as f32 * card_gap;
    let mut x = cx - row_width / 2.0;
    let mut clicked = Vec::new();

    for (i, &topic) in topics.iter().enumerate() {
        let (alpha, lift) = reveal(card_delay(i), CARD_DURATION);
        let base = egui::Rect::from_min_size(Pos2::new(x, y), card_size);
        x += card_size.x + card_gap;

        let response = ui
            .interact(base, ui.id().with(("intro-card", topic.id())), CONTROL_SENSE)
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        let hover_lift = if response.hovered() { 5.0 * scale } else { 0.0 };
        let card = base.translate(egui::vec2(0.0, lift - hover_lift));

        draw_card(ui, topic, theme, card, alpha, response.hovered(), scale);
        if response.clicked() {
            clicked.push(Control::IntroCard(topic));
        }
    }
    clicked
}

fn badge_width(ui: &egui::Ui, badge: &str, scale: f32) -> f32 {
    let galley = ui.painter().layout_no_wrap(
        badge.to_uppercase(),
        FontId::proportional(14.0 * scale),
        egui::Color32::WHITE,
    );
    galley.rect.width() + 24.0 * scale
}

fn draw_card(
    ui: &egui::Ui,
    topic: Topic,
    theme: &Theme,
    card: egui::Rect,
    alpha: f32,
    hovered: bool,
    scale: f32,
) {
    let painter = ui.painter();
    let radius = 12.0 * scale;
    if hovered {
        let shadow = card.translate(egui::vec2(0.0, 4.0 * scale));
        painter.rect_filled(shadow, radius, Theme::with_opacity(theme.border, alpha * 0.8));
    }
    painter.rect_filled(card, radius, Theme::with_opacity(theme.card_background, alpha));
    painter.rect_stroke(
        card,
        radius,
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.border, alpha)),
        egui::StrokeKind::Inside,
    );

    let pad = 24.0 * scale;
    let inner = card.width() - pad * 2.0;
    let title_h = crate::render::text::draw_text(
        ui,
        topic.card_title(),
        Pos2::new(card.left() + pad, card.top() + pad),
        FontId::proportional(26.0 * scale),
        Theme::with_opacity(theme.heading_color, alpha),
        inner,
    );
    crate::render::text::draw_text(
        ui,
        topic.tagline(),
        Pos2::new(card.left() + pad, card.top() + pad + title_h + 6.0 * scale),
        FontId::proportional(18.0 * scale),
        Theme::with_opacity(theme.muted, alpha),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::test_slides;

    #[test]
    fn test_cards_skip_introduction() {
        let deck = Deck::builtin();
        assert_eq!(
            card_topics(&deck),
            vec![Topic::TypeScript, Topic::Accessibility, Topic::RxJs]
        );
    }

    #[test]
    fn test_cards_follow_deck_order() {
        let deck = Deck::new(vec![
            (Topic::Intro, test_slides(1)),
            (Topic::RxJs, test_slides(2)),
            (Topic::TypeScript, test_slides(1)),
        ])
        .unwrap();
        assert_eq!(card_topics(&deck), vec![Topic::RxJs, Topic::TypeScript]);
    }

    #[test]
    fn test_card_delays_stagger() {
        assert_eq!(card_delay(0), 1.0);
        assert!((card_delay(2) - 1.2).abs() < 1e-6);
        assert!(card_delay(1) > card_delay(0));
    }
}
