//! Chrome state derived from the navigator.

use crate::deck::Topic;
use crate::nav::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub topic: Topic,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the header and navigation bar need to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeView {
    /// "Slide 3/16"
    pub label: String,
    /// Progress bar fill, `0.0..=1.0` of the track.
    pub progress: f32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub tabs: Vec<TabView>,
    /// Render the introduction view instead of a regular slide.
    pub show_intro: bool,
}

impl ChromeView {
    pub fn from_navigator(nav: &Navigator) -> Self {
        let current = nav.current_topic();
        let tabs = nav
            .deck()
            .topics_in_order()
            .iter()
            .map(|&topic| TabView {
                topic,
                label: topic.label(),
                active: topic == current,
            })
            .collect();

        Self {
            label: format!(
                "Slide {}/{}",
                nav.global_position() + 1,
                nav.total_slide_count()
            ),
            progress: nav.progress_fraction(),
            previous_enabled: !nav.is_at_start(),
            next_enabled: !nav.is_at_end(),
            tabs,
            show_intro: current == Topic::Intro,
        }
    }

    /// Width of the progress fill inside a track of `track_width`.
    pub fn progress_width(&self, track_width: f32) -> f32 {
        track_width * self.progress.clamp(0.0, 1.0)
    }
}
