use colored::Colorize;
use serde::Serialize;

use crate::deck::{Deck, Topic};

#[derive(Debug, Serialize, PartialEq)]
pub struct Outline {
    pub total: usize,
    pub topics: Vec<TopicOutline>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TopicOutline {
    pub topic: Topic,
    pub label: &'static str,
    pub slides: Vec<SlideOutline>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SlideOutline {
    /// 1-based position in the whole presentation.
    pub number: usize,
    pub id: &'static str,
    pub title: &'static str,
}

pub fn build(deck: &Deck) -> Outline {
    let mut topics: Vec<TopicOutline> = Vec::new();
    for (global, (topic, _, slide)) in deck.iter_slides().enumerate() {
        if topics.last().is_none_or(|t| t.topic != topic) {
            topics.push(TopicOutline {
                topic,
                label: topic.label(),
                slides: Vec::new(),
            });
        }
        if let Some(current) = topics.last_mut() {
            current.slides.push(SlideOutline {
                number: global + 1,
                id: slide.id,
                title: slide.title,
            });
        }
    }
    Outline {
        total: deck.total_slide_count(),
        topics,
    }
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let outline = build(&Deck::builtin());
    if json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    let width = outline.total.to_string().len();
    for topic in &outline.topics {
        println!("{} {}", topic.label.bold(), format!("({})", topic.topic).dimmed());
        for slide in &topic.slides {
            let number = format!("{:>width$}", slide.number);
            println!("  {}  {}", number.cyan(), slide.title);
        }
    }
    println!("{}", format!("{} slides", outline.total).dimmed());
    Ok(())
}
