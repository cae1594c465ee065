//! Entrance animations. Cosmetic only: nothing here feeds back into
//! navigation, and a new navigation simply restarts the entrance.

use std::time::Instant;

/// Seconds for the slide container to fade/slide in.
pub const SLIDE_ENTER_DURATION: f32 = 0.5;
/// Horizontal travel of the slide container, in reference pixels.
pub const SLIDE_TRAVEL: f32 = 20.0;
/// Seconds for one staggered element to appear.
pub const ELEMENT_DURATION: f32 = 0.5;
/// Vertical lift of a staggered element before it settles, in reference pixels.
pub const ELEMENT_LIFT: f32 = 20.0;
/// After this many seconds every entrance in the deck has finished.
pub const SETTLE_TIME: f32 = 1.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Fade,
    SlideHorizontal,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::SlideHorizontal,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::SlideHorizontal => "slide",
            Self::None => "none",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            Self::SlideHorizontal => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::SlideHorizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
}

/// Container opacity and horizontal offset for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    /// Reference pixels; multiply by the render scale.
    pub offset_x: f32,
}

impl EntranceFrame {
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
    };
}

/// Entrance of the slide currently on screen.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    kind: TransitionKind,
    direction: TransitionDirection,
    start: Option<Instant>,
}

impl Entrance {
    pub fn new(kind: TransitionKind, direction: TransitionDirection) -> Self {
        Self {
            kind,
            direction,
            start: Some(Instant::now()),
        }
    }

    /// Fully shown from the first frame (exports, `none` transitions).
    pub fn settled(kind: TransitionKind) -> Self {
        Self {
            kind,
            direction: TransitionDirection::Forward,
            start: None,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Seconds since the entrance began; infinite once animation is off.
    pub fn elapsed(&self) -> f32 {
        match (self.kind, self.start) {
            (TransitionKind::None, _) | (_, None) => f32::INFINITY,
            (_, Some(start)) => start.elapsed().as_secs_f32(),
        }
    }

    pub fn frame(&self) -> EntranceFrame {
        frame_at(self.kind, self.direction, self.elapsed())
    }

    pub fn is_running(&self) -> bool {
        self.elapsed() < SETTLE_TIME
    }
}

pub fn frame_at(
    kind: TransitionKind,
    direction: TransitionDirection,
    elapsed: f32,
) -> EntranceFrame {
    let t = ease_out((elapsed / SLIDE_ENTER_DURATION).clamp(0.0, 1.0));
    match kind {
        TransitionKind::None => EntranceFrame::SETTLED,
        TransitionKind::Fade => EntranceFrame {
            opacity: t,
            offset_x: 0.0,
        },
        TransitionKind::SlideHorizontal => {
            let sign = match direction {
                TransitionDirection::Forward => 1.0,
                TransitionDirection::Backward => -1.0,
            };
            EntranceFrame {
                opacity: t,
                offset_x: sign * SLIDE_TRAVEL * (1.0 - t),
            }
        }
    }
}

/// Eased `0..=1` progress of an element that starts `delay` seconds into the entrance.
pub fn element_progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if elapsed.is_infinite() {
        return 1.0;
    }
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    ease_out(((elapsed - delay) / duration).clamp(0.0, 1.0))
}

pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            TransitionKind::Fade,
            TransitionKind::SlideHorizontal,
            TransitionKind::None,
        ] {
            assert_eq!(TransitionKind::from_name(kind.name()), kind);
        }
        assert_eq!(
            TransitionKind::from_name("spatial"),
            TransitionKind::SlideHorizontal
        );
    }

    #[test]
    fn test_cycle_visits_every_kind() {
        let start = TransitionKind::SlideHorizontal;
        let a = start.cycled();
        let b = a.cycled();
        assert_eq!(a, TransitionKind::Fade);
        assert_eq!(b, TransitionKind::None);
        assert_eq!(b.cycled(), start);
    }

    #[test]
    fn test_slide_frame_endpoints() {
        let first = frame_at(TransitionKind::SlideHorizontal, TransitionDirection::Forward, 0.0);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.offset_x, SLIDE_TRAVEL);

        let back = frame_at(TransitionKind::SlideHorizontal, TransitionDirection::Backward, 0.0);
        assert_eq!(back.offset_x, -SLIDE_TRAVEL);

        let done = frame_at(
            TransitionKind::SlideHorizontal,
            TransitionDirection::Forward,
            SLIDE_ENTER_DURATION,
        );
        assert_eq!(done, EntranceFrame::SETTLED);
    }

    #[test]
    fn test_fade_frame_has_no_offset() {
        let mid = frame_at(TransitionKind::Fade, TransitionDirection::Backward, 0.1);
        assert_eq!(mid.offset_x, 0.0);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    }

    #[test]
    fn test_none_and_settled_are_immediate() {
        assert_eq!(
            frame_at(TransitionKind::None, TransitionDirection::Forward, 0.0),
            EntranceFrame::SETTLED
        );
        let settled = Entrance::settled(TransitionKind::SlideHorizontal);
        assert_eq!(settled.frame(), EntranceFrame::SETTLED);
        assert!(!settled.is_running());

        let none = Entrance::new(TransitionKind::None, TransitionDirection::Forward);
        assert!(!none.is_running());
    }

    #[test]
    fn test_fresh_entrance_is_running() {
        let e = Entrance::new(TransitionKind::Fade, TransitionDirection::Forward);
        assert!(e.is_running());
    }

    #[test]
    fn test_element_progress_waits_for_delay() {
        assert_eq!(element_progress(0.1, 0.3, 0.5), 0.0);
        assert_eq!(element_progress(0.8, 0.3, 0.5), 1.0);
        let mid = element_progress(0.55, 0.3, 0.5);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(element_progress(f32::INFINITY, 5.0, 0.5), 1.0);
        assert_eq!(element_progress(0.2, 0.1, 0.0), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
