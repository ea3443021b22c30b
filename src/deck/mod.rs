//! Access to the presentation hosting the generated slide

mod types;
mod html;

pub use types::{Slide, SlideIndices, SlideNode, UNCOUNTED};
pub use html::HtmlDeck;

use crate::utils::error::TocError;

/// The presentation as seen by the table of contents generator
pub trait Deck {
    /// All slides in document order, vertical stacks flattened.
    ///
    /// `None` when the presentation has no slide collection at all.
    fn slides(&self) -> Option<Vec<Slide>>;

    /// Total number of slides
    fn total_slides(&self) -> usize {
        self.slides().map_or(0, |slides| slides.len())
    }

    /// Insert a new top-level slide before the container child at
    /// `position - 1`, or append it when there is no such child
    fn insert_slide(&mut self, position: usize, section_html: &str) -> Result<(), TocError>;
}

/// In-memory presentation for embedding and tests.
///
/// The slide container is modelled as one label per horizontal slide,
/// inserted slides are stored as their HTML.
#[derive(Debug, Clone, Default)]
pub struct MemoryDeck {
    slides: Option<Vec<Slide>>,
    children: Vec<String>,
}

impl MemoryDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        let mut children: Vec<String> = Vec::new();
        let mut last_h = None;
        for slide in &slides {
            if last_h != Some(slide.indices.h) {
                children.push(format!("slide-{}", slide.indices.h));
                last_h = Some(slide.indices.h);
            }
        }

        Self {
            slides: Some(slides),
            children,
        }
    }

    /// A presentation without any slide collection
    pub fn without_slides() -> Self {
        Self::default()
    }

    /// Children of the slide container, in order
    pub fn children(&self) -> &[String] {
        &self.children
    }
}

impl Deck for MemoryDeck {
    fn slides(&self) -> Option<Vec<Slide>> {
        self.slides.clone()
    }

    fn insert_slide(&mut self, position: usize, section_html: &str) -> Result<(), TocError> {
        match position.checked_sub(1).filter(|index| *index < self.children.len()) {
            Some(index) => self.children.insert(index, section_html.to_string()),
            None => self.children.push(section_html.to_string()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(count: usize) -> MemoryDeck {
        MemoryDeck::new((0..count).map(|h| Slide::new(vec![], h)).collect())
    }

    #[test]
    fn test_insert_before_position() {
        let mut deck = deck(3);
        deck.insert_slide(2, "toc").unwrap();
        assert_eq!(deck.children(), ["slide-0", "toc", "slide-1", "slide-2"]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut deck = deck(1);
        deck.insert_slide(2, "toc").unwrap();
        assert_eq!(deck.children(), ["slide-0", "toc"]);
    }

    #[test]
    fn test_insert_into_empty_container() {
        let mut deck = deck(0);
        deck.insert_slide(1, "toc").unwrap();
        assert_eq!(deck.children(), ["toc"]);
    }

    #[test]
    fn test_stacks_share_one_container_child() {
        let slides = vec![
            Slide::new(vec![], 0),
            Slide::new(vec![], 1),
            Slide::new(vec![], 1).with_vertical(1),
        ];
        let deck = MemoryDeck::new(slides);
        assert_eq!(deck.children().len(), 2);
        assert_eq!(deck.total_slides(), 3);
    }

    #[test]
    fn test_without_slides() {
        let deck = MemoryDeck::without_slides();
        assert!(deck.slides().is_none());
        assert_eq!(deck.total_slides(), 0);
    }
}
