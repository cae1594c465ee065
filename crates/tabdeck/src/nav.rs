//! Navigation state machine.
//!
//! Reachable states are `(topic, slide_index)` pairs with
//! `slide_index < deck.slide_count(topic)`. Laid end to end in topic order
//! they form a single path of `total_slide_count` nodes: `Next`/`Previous`
//! move one step along it and stop at the ends, `SelectTopic` jumps to the
//! first slide of a topic.

use crate::deck::{Deck, Slide, Topic};
use crate::error::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Previous,
    SelectTopic(Topic),
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationState {
    pub topic: Topic,
    pub slide_index: usize,
}

impl NavigationState {
    /// First slide of the first topic.
    pub fn start(deck: &Deck) -> Self {
        Self {
            topic: deck.first_topic(),
            slide_index: 0,
        }
    }

    /// Apply one event. Pure: the deck is only read.
    ///
    /// Panics when `SelectTopic` names a topic that is not in `deck`; the
    /// only callers are controls built from the deck's own topic list.
    pub fn apply(self, deck: &Deck, event: NavEvent) -> Self {
        match event {
            NavEvent::Next => self.next(deck),
            NavEvent::Previous => self.previous(deck),
            NavEvent::SelectTopic(topic) => {
                assert!(
                    deck.contains(topic),
                    "cannot select topic '{topic}': not part of this deck"
                );
                Self {
                    topic,
                    slide_index: 0,
                }
            }
            NavEvent::First => Self::start(deck),
            NavEvent::Last => {
                let topic = deck.last_topic();
                Self {
                    topic,
                    slide_index: deck.slide_count(topic) - 1,
                }
            }
        }
    }

    fn next(self, deck: &Deck) -> Self {
        if self.slide_index + 1 < deck.slide_count(self.topic) {
            return Self {
                slide_index: self.slide_index + 1,
                ..self
            };
        }
        let order = deck.topics_in_order();
        match deck.position_of(self.topic) {
            Some(pos) if pos + 1 < order.len() => Self {
                topic: order[pos + 1],
                slide_index: 0,
            },
            _ => self,
        }
    }

    fn previous(self, deck: &Deck) -> Self {
        if self.slide_index > 0 {
            return Self {
                slide_index: self.slide_index - 1,
                ..self
            };
        }
        match deck.position_of(self.topic) {
            Some(pos) if pos > 0 => {
                let topic = deck.topics_in_order()[pos - 1];
                Self {
                    topic,
                    slide_index: deck.slide_count(topic) - 1,
                }
            }
            _ => self,
        }
    }

    /// Slides of every earlier topic plus the in-topic index.
    pub fn global_position(&self, deck: &Deck) -> usize {
        let before: usize = deck
            .topics_in_order()
            .iter()
            .take_while(|t| **t != self.topic)
            .map(|t| deck.slide_count(*t))
            .sum();
        before + self.slide_index
    }
}

/// Owns the deck and the one live [`NavigationState`].
#[derive(Debug, Clone)]
pub struct Navigator {
    deck: Deck,
    state: NavigationState,
}

impl Navigator {
    pub fn new(deck: Deck) -> Self {
        let state = NavigationState::start(&deck);
        Self { deck, state }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_topic(&self) -> Topic {
        self.state.topic
    }

    pub fn slide_index(&self) -> usize {
        self.state.slide_index
    }

    /// Apply `event`, returning whether the state changed.
    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        let before = self.state;
        self.state = before.apply(&self.deck, event);
        let changed = self.state != before;
        if changed {
            tracing::debug!(
                ?event,
                from = %format_args!("{}#{}", before.topic, before.slide_index),
                to = %format_args!("{}#{}", self.state.topic, self.state.slide_index),
                position = self.global_position(),
                "navigated"
            );
        } else {
            tracing::trace!(?event, "navigation no-op");
        }
        changed
    }

    pub fn advance(&mut self) -> bool {
        self.dispatch(NavEvent::Next)
    }

    pub fn retreat(&mut self) -> bool {
        self.dispatch(NavEvent::Previous)
    }

    /// Go to the first slide of `topic`, even when already on it. Returns
    /// false only when already at that slide.
    pub fn jump_to_topic(&mut self, topic: Topic) -> bool {
        self.dispatch(NavEvent::SelectTopic(topic))
    }

    pub fn jump_to_first(&mut self) -> bool {
        self.dispatch(NavEvent::First)
    }

    pub fn jump_to_last(&mut self) -> bool {
        self.dispatch(NavEvent::Last)
    }

    /// Move to an absolute zero-based position across all topics.
    pub fn seek(&mut self, global: usize) -> Result<(), DeckError> {
        let (topic, slide_index) =
            self.deck
                .locate(global)
                .ok_or(DeckError::IndexOutOfRange {
                    topic: None,
                    index: global,
                    count: self.deck.total_slide_count(),
                })?;
        self.state = NavigationState { topic, slide_index };
        tracing::debug!(global, %topic, slide_index, "seeked");
        Ok(())
    }

    pub fn global_position(&self) -> usize {
        self.state.global_position(&self.deck)
    }

    pub fn total_slide_count(&self) -> usize {
        self.deck.total_slide_count()
    }

    /// Position normalized to `[0, 1]`. A single-slide deck counts as complete.
    pub fn progress_fraction(&self) -> f32 {
        let total = self.total_slide_count();
        if total <= 1 {
            return 1.0;
        }
        self.global_position() as f32 / (total - 1) as f32
    }

    pub fn is_at_start(&self) -> bool {
        self.global_position() == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.global_position() + 1 == self.total_slide_count()
    }

    pub fn current_slide(&self) -> &Slide {
        // Reachable states always index a slide; see tests below.
        match self
            .deck
            .slide_at(self.state.topic, self.state.slide_index)
        {
            Ok(slide) => slide,
            Err(e) => unreachable!("navigator left the deck: {e}"),
        }
    }
}
