//! Translates host input into navigation events.

use eframe::egui;

use crate::deck::Topic;
use crate::nav::NavEvent;

/// A clickable control in the viewer chrome or on the introduction view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PreviousButton,
    NextButton,
    Tab(Topic),
    IntroCard(Topic),
}

impl Control {
    pub fn event(self) -> NavEvent {
        match self {
            Self::PreviousButton => NavEvent::Previous,
            Self::NextButton => NavEvent::Next,
            Self::Tab(topic) | Self::IntroCard(topic) => NavEvent::SelectTopic(topic),
        }
    }
}

/// Navigation meaning of a key, if any.
pub fn event_for_key(key: egui::Key) -> Option<NavEvent> {
    match key {
        egui::Key::ArrowRight | egui::Key::Space | egui::Key::Enter => Some(NavEvent::Next),
        egui::Key::ArrowLeft => Some(NavEvent::Previous),
        egui::Key::Home => Some(NavEvent::First),
        egui::Key::End => Some(NavEvent::Last),
        _ => None,
    }
}

/// One navigation-relevant input, in the order the host delivered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameInput {
    Nav(NavEvent),
    /// Primary button release; a click on a control completes here.
    PointerRelease,
}

/// Key presses and primary releases for this frame, in delivery order.
///
/// Auto-repeat presses count; chorded presses (Ctrl, Alt, Cmd) do not.
pub fn frame_inputs(events: &[egui::Event]) -> Vec<FrameInput> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !(modifiers.ctrl || modifiers.alt || modifiers.command) => {
                event_for_key(*key).map(FrameInput::Nav)
            }
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => Some(FrameInput::PointerRelease),
            _ => None,
        })
        .collect()
}

/// Merge key events with the controls clicked this frame.
///
/// Each click is placed at the release that completed it. Releases that hit
/// no control are dropped; clicks left over go last.
pub fn ordered_events(inputs: &[FrameInput], clicks: &[Control]) -> Vec<NavEvent> {
    let mut clicks = clicks.iter();
    let mut events: Vec<NavEvent> = inputs
        .iter()
        .filter_map(|input| match input {
            FrameInput::Nav(event) => Some(*event),
            FrameInput::PointerRelease => clicks.next().map(|c| c.event()),
        })
        .collect();
    events.extend(clicks.map(|c| c.event()));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn release(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_forward_keys() {
        for key in [egui::Key::ArrowRight, egui::Key::Space, egui::Key::Enter] {
            assert_eq!(event_for_key(key), Some(NavEvent::Next));
        }
    }

    #[test]
    fn test_backward_and_jump_keys() {
        assert_eq!(event_for_key(egui::Key::ArrowLeft), Some(NavEvent::Previous));
        assert_eq!(event_for_key(egui::Key::Home), Some(NavEvent::First));
        assert_eq!(event_for_key(egui::Key::End), Some(NavEvent::Last));
        assert_eq!(event_for_key(egui::Key::ArrowUp), None);
        assert_eq!(event_for_key(egui::Key::Q), None);
    }

    #[test]
    fn test_frame_inputs_keep_order_and_skip_releases() {
        let events = vec![
            press(egui::Key::ArrowRight),
            release(egui::Key::ArrowRight),
            press(egui::Key::ArrowLeft),
            egui::Event::Text(" ".to_string()),
            press(egui::Key::Space),
        ];
        assert_eq!(
            frame_inputs(&events),
            vec![
                FrameInput::Nav(NavEvent::Next),
                FrameInput::Nav(NavEvent::Previous),
                FrameInput::Nav(NavEvent::Next),
            ]
        );
    }

    #[test]
    fn test_frame_inputs_include_repeats() {
        let mut repeat = press(egui::Key::ArrowRight);
        if let egui::Event::Key { repeat: r, .. } = &mut repeat {
            *r = true;
        }
        let events = vec![press(egui::Key::ArrowRight), repeat];
        assert_eq!(frame_inputs(&events), vec![FrameInput::Nav(NavEvent::Next); 2]);
    }

    #[test]
    fn test_frame_inputs_ignore_chords() {
        let events = vec![egui::Event::Key {
            key: egui::Key::ArrowRight,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        }];
        assert!(frame_inputs(&events).is_empty());
    }

    #[test]
    fn test_controls_map_to_events() {
        assert_eq!(Control::PreviousButton.event(), NavEvent::Previous);
        assert_eq!(Control::NextButton.event(), NavEvent::Next);
        assert_eq!(
            Control::Tab(Topic::RxJs).event(),
            NavEvent::SelectTopic(Topic::RxJs)
        );
        assert_eq!(
            Control::IntroCard(Topic::Accessibility).event(),
            NavEvent::SelectTopic(Topic::Accessibility)
        );
    }

    fn pointer(pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_frame_inputs_record_primary_releases() {
        let events = vec![
            pointer(true),
            press(egui::Key::ArrowRight),
            pointer(false),
            egui::Event::PointerButton {
                pos: egui::pos2(10.0, 10.0),
                button: egui::PointerButton::Secondary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            },
        ];
        assert_eq!(
            frame_inputs(&events),
            vec![FrameInput::Nav(NavEvent::Next), FrameInput::PointerRelease]
        );
    }

    #[test]
    fn test_click_after_key_applies_last() {
        let inputs = [FrameInput::Nav(NavEvent::Next), FrameInput::PointerRelease];
        assert_eq!(
            ordered_events(&inputs, &[Control::Tab(Topic::RxJs)]),
            vec![NavEvent::Next, NavEvent::SelectTopic(Topic::RxJs)]
        );
    }

    #[test]
    fn test_click_before_key_applies_first() {
        let inputs = [FrameInput::PointerRelease, FrameInput::Nav(NavEvent::Next)];
        assert_eq!(
            ordered_events(&inputs, &[Control::Tab(Topic::RxJs)]),
            vec![NavEvent::SelectTopic(Topic::RxJs), NavEvent::Next]
        );
    }

    #[test]
    fn test_releases_without_clicks_are_dropped() {
        let inputs = [
            FrameInput::PointerRelease,
            FrameInput::Nav(NavEvent::Previous),
            FrameInput::PointerRelease,
        ];
        assert_eq!(ordered_events(&inputs, &[]), vec![NavEvent::Previous]);
        assert_eq!(
            ordered_events(&[], &[Control::NextButton]),
            vec![NavEvent::Next]
        );
    }
}
