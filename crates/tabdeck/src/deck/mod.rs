pub mod content;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, UnknownTopic};

/// One of the fixed presentation topics, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "intro")]
    Intro,
    #[serde(rename = "typescript")]
    TypeScript,
    #[serde(rename = "accessibility")]
    Accessibility,
    #[serde(rename = "rxjs")]
    RxJs,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Intro,
        Topic::TypeScript,
        Topic::Accessibility,
        Topic::RxJs,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::TypeScript => "typescript",
            Self::Accessibility => "accessibility",
            Self::RxJs => "rxjs",
        }
    }

    /// Label used on the header tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "Introduction",
            Self::TypeScript => "TypeScript",
            Self::Accessibility => "Accessibility",
            Self::RxJs => "RxJS",
        }
    }

    /// Card title on the introduction view.
    pub fn card_title(&self) -> &'static str {
        match self {
            Self::Intro => "Introduction",
            Self::TypeScript => "TypeScript",
            Self::Accessibility => "Web Accessibility",
            Self::RxJs => "RxJS",
        }
    }

    /// Card subtitle on the introduction view.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Intro => "Overview",
            Self::TypeScript => "Best Practices",
            Self::Accessibility => "WCAG Guidelines",
            Self::RxJs => "Reactive Programming",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Topic::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

/// Static content of a single slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub id: &'static str,
    /// Small pill above the title, e.g. "Part 1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    /// Grid of titled practice cards.
    Practices { items: Vec<Practice> },
    Section { title: &'static str },
    Code {
        language: &'static str,
        source: &'static str,
    },
    Bullets { items: Vec<Bullet> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Practice {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub text: &'static str,
}

impl Slide {
    /// Number of blocks that get their own staggered entrance.
    pub fn element_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Practices { items } => items.len(),
                Block::Bullets { items } => items.len(),
                Block::Section { .. } | Block::Code { .. } => 1,
            })
            .sum()
    }
}

#[derive(Debug, Clone)]
struct TopicSlides {
    topic: Topic,
    slides: Vec<Slide>,
}

/// Ordered registry of topics and their slides. Immutable once built.
#[derive(Debug, Clone)]
pub struct Deck {
    entries: Vec<TopicSlides>,
    order: Vec<Topic>,
    total: usize,
}

impl Deck {
    /// Build a deck from topics in presentation order.
    pub fn new(topics: Vec<(Topic, Vec<Slide>)>) -> Result<Self, DeckError> {
        if topics.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let mut entries: Vec<TopicSlides> = Vec::with_capacity(topics.len());
        for (topic, slides) in topics {
            if entries.iter().any(|e| e.topic == topic) {
                return Err(DeckError::DuplicateTopic(topic));
            }
            if slides.is_empty() {
                return Err(DeckError::EmptyTopic(topic));
            }
            entries.push(TopicSlides { topic, slides });
        }

        let order = entries.iter().map(|e| e.topic).collect();
        let total = entries.iter().map(|e| e.slides.len()).sum();
        Ok(Self {
            entries,
            order,
            total,
        })
    }

    /// The built-in presentation: an introduction followed by three topics.
    pub fn builtin() -> Self {
        // Content is compiled in; covered by test_builtin_deck_shape.
        Self::new(content::builtin_topics())
            .unwrap_or_else(|e| panic!("built-in deck is malformed: {e}"))
    }

    pub fn topics_in_order(&self) -> &[Topic] {
        &self.order
    }

    pub fn first_topic(&self) -> Topic {
        self.order[0]
    }

    pub fn last_topic(&self) -> Topic {
        self.order[self.order.len() - 1]
    }

    pub fn contains(&self, topic: Topic) -> bool {
        self.order.contains(&topic)
    }

    /// Index of `topic` within the presentation order.
    pub fn position_of(&self, topic: Topic) -> Option<usize> {
        self.order.iter().position(|t| *t == topic)
    }

    /// Number of slides in `topic`; zero for a topic that is not part of the deck.
    pub fn slide_count(&self, topic: Topic) -> usize {
        self.entry(topic).map_or(0, |e| e.slides.len())
    }

    pub fn total_slide_count(&self) -> usize {
        self.total
    }

    pub fn slide_at(&self, topic: Topic, index: usize) -> Result<&Slide, DeckError> {
        let slides = self.entry(topic).map(|e| e.slides.as_slice()).unwrap_or(&[]);
        slides.get(index).ok_or(DeckError::IndexOutOfRange {
            topic: Some(topic),
            index,
            count: slides.len(),
        })
    }

    /// Global position of the first slide of `topic`.
    pub fn offset_of(&self, topic: Topic) -> Option<usize> {
        let pos = self.position_of(topic)?;
        Some(self.entries[..pos].iter().map(|e| e.slides.len()).sum())
    }

    /// Map a global position back to `(topic, slide_index)`.
    pub fn locate(&self, global: usize) -> Option<(Topic, usize)> {
        let mut remaining = global;
        for entry in &self.entries {
            if remaining < entry.slides.len() {
                return Some((entry.topic, remaining));
            }
            remaining -= entry.slides.len();
        }
        None
    }

    /// Every slide in global order, with its topic and in-topic index.
    pub fn iter_slides(&self) -> impl Iterator<Item = (Topic, usize, &Slide)> {
        self.entries.iter().flat_map(|e| {
            e.slides
                .iter()
                .enumerate()
                .map(move |(i, slide)| (e.topic, i, slide))
        })
    }

    fn entry(&self, topic: Topic) -> Option<&TopicSlides> {
        self.entries.iter().find(|e| e.topic == topic)
    }
}

#[cfg(test)]
pub(crate) fn test_slide(id: &'static str) -> Slide {
    Slide {
        id,
        badge: None,
        title: id,
        subtitle: "",
        blocks: Vec::new(),
    }
}

#[cfg(test)]
pub(crate) fn test_slides(n: usize) -> Vec<Slide> {
    (0..n).map(|_| test_slide("slide")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new(vec![
            (Topic::Intro, test_slides(1)),
            (Topic::TypeScript, test_slides(5)),
            (Topic::Accessibility, test_slides(5)),
            (Topic::RxJs, test_slides(5)),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_deck_shape() {
        let deck = Deck::builtin();
        assert_eq!(deck.topics_in_order(), &Topic::ALL);
        assert_eq!(deck.slide_count(Topic::Intro), 1);
        assert_eq!(deck.slide_count(Topic::TypeScript), 5);
        assert_eq!(deck.slide_count(Topic::Accessibility), 5);
        assert_eq!(deck.slide_count(Topic::RxJs), 5);
        assert_eq!(deck.total_slide_count(), 16);
    }

    #[test]
    fn test_builtin_slide_ids_are_unique() {
        let deck = Deck::builtin();
        let mut ids: Vec<&str> = deck.iter_slides().map(|(_, _, s)| s.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_builtin_topic_slides_have_content() {
        let deck = Deck::builtin();
        for (topic, _, slide) in deck.iter_slides() {
            assert!(!slide.title.is_empty());
            if topic != Topic::Intro {
                assert!(
                    !slide.blocks.is_empty(),
                    "slide {} has no blocks",
                    slide.id
                );
            }
        }
    }

    #[test]
    fn test_slide_at_bounds() {
        let deck = sample_deck();
        assert!(deck.slide_at(Topic::TypeScript, 4).is_ok());
        assert_eq!(
            deck.slide_at(Topic::TypeScript, 5),
            Err(DeckError::IndexOutOfRange {
                topic: Some(Topic::TypeScript),
                index: 5,
                count: 5,
            })
        );
        assert!(deck.slide_at(Topic::Intro, 1).is_err());
    }

    #[test]
    fn test_slide_at_topic_missing_from_deck() {
        let deck = Deck::new(vec![(Topic::Intro, test_slides(1))]).unwrap();
        assert_eq!(deck.slide_count(Topic::RxJs), 0);
        assert_eq!(
            deck.slide_at(Topic::RxJs, 0),
            Err(DeckError::IndexOutOfRange {
                topic: Some(Topic::RxJs),
                index: 0,
                count: 0,
            })
        );
    }

    #[test]
    fn test_new_rejects_empty_deck() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), DeckError::EmptyDeck);
    }

    #[test]
    fn test_new_rejects_empty_topic() {
        let err = Deck::new(vec![
            (Topic::Intro, test_slides(1)),
            (Topic::RxJs, Vec::new()),
        ])
        .unwrap_err();
        assert_eq!(err, DeckError::EmptyTopic(Topic::RxJs));
    }

    #[test]
    fn test_new_rejects_duplicate_topic() {
        let err = Deck::new(vec![
            (Topic::Intro, test_slides(1)),
            (Topic::Intro, test_slides(2)),
        ])
        .unwrap_err();
        assert_eq!(err, DeckError::DuplicateTopic(Topic::Intro));
    }

    #[test]
    fn test_offsets_and_locate() {
        let deck = sample_deck();
        assert_eq!(deck.offset_of(Topic::Intro), Some(0));
        assert_eq!(deck.offset_of(Topic::TypeScript), Some(1));
        assert_eq!(deck.offset_of(Topic::Accessibility), Some(6));
        assert_eq!(deck.offset_of(Topic::RxJs), Some(11));

        assert_eq!(deck.locate(0), Some((Topic::Intro, 0)));
        assert_eq!(deck.locate(5), Some((Topic::TypeScript, 4)));
        assert_eq!(deck.locate(6), Some((Topic::Accessibility, 0)));
        assert_eq!(deck.locate(15), Some((Topic::RxJs, 4)));
        assert_eq!(deck.locate(16), None);
    }

    #[test]
    fn test_custom_order_is_respected() {
        let deck = Deck::new(vec![
            (Topic::RxJs, test_slides(2)),
            (Topic::Intro, test_slides(1)),
        ])
        .unwrap();
        assert_eq!(deck.first_topic(), Topic::RxJs);
        assert_eq!(deck.last_topic(), Topic::Intro);
        assert_eq!(deck.offset_of(Topic::Intro), Some(2));
        assert_eq!(deck.offset_of(Topic::TypeScript), None);
    }

    #[test]
    fn test_iter_slides_follows_global_order() {
        let deck = sample_deck();
        let positions: Vec<(Topic, usize)> =
            deck.iter_slides().map(|(t, i, _)| (t, i)).collect();
        assert_eq!(positions.len(), 16);
        for (global, located) in positions.iter().enumerate() {
            assert_eq!(deck.locate(global), Some(*located));
        }
    }

    #[test]
    fn test_topic_parse_and_display() {
        for topic in Topic::ALL {
            assert_eq!(topic.to_string().parse::<Topic>(), Ok(topic));
        }
        assert_eq!(" RxJS ".parse::<Topic>(), Ok(Topic::RxJs));
        assert!("python".parse::<Topic>().is_err());
    }

    #[test]
    fn test_topic_serde_ids() {
        let yaml = serde_yaml::to_string(&Topic::TypeScript).unwrap();
        assert_eq!(yaml.trim(), "typescript");
        let back: Topic = serde_yaml::from_str("accessibility").unwrap();
        assert_eq!(back, Topic::Accessibility);
    }

    #[test]
    fn test_element_count() {
        let deck = Deck::builtin();
        let intro = deck.slide_at(Topic::TypeScript, 0).unwrap();
        // four practice cards
        assert_eq!(intro.element_count(), 4);
    }
}
