use thiserror::Error;

use crate::deck::Topic;

/// Errors raised by the deck registry and navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A slide index outside `[0, count)` for its topic, or a global
    /// position outside `[0, total)` when `topic` is `None`.
    #[error("slide index {index} out of range for {} ({count} slides)", describe(.topic))]
    IndexOutOfRange {
        topic: Option<Topic>,
        index: usize,
        count: usize,
    },

    #[error("a deck needs at least one topic")]
    EmptyDeck,

    #[error("topic '{0}' has no slides")]
    EmptyTopic(Topic),

    #[error("topic '{0}' appears more than once")]
    DuplicateTopic(Topic),
}

fn describe(topic: &Option<Topic>) -> String {
    match topic {
        Some(t) => format!("topic '{t}'"),
        None => "the presentation".to_string(),
    }
}

/// A topic id that is not one of the known topics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic '{0}'. Must be one of: intro, typescript, accessibility, rxjs.")]
pub struct UnknownTopic(pub String);
