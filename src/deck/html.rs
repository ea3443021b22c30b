use std::path::Path;

use ego_tree::{NodeId, NodeRef, Tree};
use lazy_static::lazy_static;
use log::debug;
use scraper::{ElementRef, Html, Node, Selector};

use crate::deck::types::{Slide, SlideIndices, SlideNode, UNCOUNTED};
use crate::deck::Deck;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

lazy_static! {
    static ref SLIDES_SELECTOR: Selector = Selector::parse(".slides").unwrap();
}

/// A reveal.js presentation held as a parsed HTML document.
///
/// Top-level slides are the `section` children of the first element with
/// the `slides` class. A section containing sections is a vertical stack
/// and contributes its inner sections instead of itself.
pub struct HtmlDeck {
    document: Html,
}

impl HtmlDeck {
    /// Parse a complete HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Read and parse an HTML document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        let html = fs::read_file(path)?;
        Ok(Self::parse(&html))
    }

    /// Serialize the document, including any inserted slide
    pub fn to_html(&self) -> String {
        self.document.html()
    }

    fn container(&self) -> Option<ElementRef<'_>> {
        self.document.select(&SLIDES_SELECTOR).next()
    }
}

impl Deck for HtmlDeck {
    fn slides(&self) -> Option<Vec<Slide>> {
        let container = self.container()?;
        let mut slides = Vec::new();

        for (h, section) in container.children().filter_map(ElementRef::wrap).filter(is_section).enumerate() {
            let stack: Vec<ElementRef> = section.children().filter_map(ElementRef::wrap).filter(is_section).collect();

            if stack.is_empty() {
                slides.push(read_slide(section, SlideIndices { h, v: 0 }));
            } else {
                for (v, inner) in stack.into_iter().enumerate() {
                    slides.push(read_slide(inner, SlideIndices { h, v }));
                }
            }
        }

        Some(slides)
    }

    fn insert_slide(&mut self, position: usize, section_html: &str) -> Result<(), TocError> {
        let container_id = self
            .container()
            .map(|container| container.id())
            .ok_or_else(|| TocError::Document("no element with class \"slides\" found".to_string()))?;

        // Element children only, as counted by the browser's `children`
        let anchor = position.checked_sub(1).and_then(|index| {
            self.document
                .tree
                .get(container_id)?
                .children()
                .filter(|child| child.value().is_element())
                .nth(index)
                .map(|child| child.id())
        });

        let fragment = Html::parse_fragment(section_html);
        let section = fragment
            .root_element()
            .children()
            .find(|child| child.value().is_element())
            .ok_or_else(|| TocError::Document("generated slide has no root element".to_string()))?;

        let inserted = match anchor {
            Some(anchor_id) => self.document.tree.get_mut(anchor_id).map(|mut anchor| {
                debug!("Inserting slide before container child {}", position - 1);
                anchor.insert_before(section.value().clone()).id()
            }),
            None => self.document.tree.get_mut(container_id).map(|mut container| {
                debug!("Appending slide at the end of the presentation");
                container.append(section.value().clone()).id()
            }),
        }
        .ok_or_else(|| TocError::Document("slide container vanished during insertion".to_string()))?;

        graft(&mut self.document.tree, inserted, section);
        Ok(())
    }
}

fn is_section(element: &ElementRef) -> bool {
    element.value().name() == "section"
}

fn read_slide(section: ElementRef, indices: SlideIndices) -> Slide {
    let children = section
        .children()
        .filter_map(|child| match child.value() {
            Node::Element(element) => {
                let text = ElementRef::wrap(child)
                    .map(|e| e.text().collect::<String>())
                    .unwrap_or_default();
                Some(SlideNode::element(element.name(), &text))
            }
            Node::Text(text) => {
                let raw: &str = text;
                Some(SlideNode::text(raw))
            }
            _ => None,
        })
        .collect();

    Slide {
        children,
        uncounted: section.value().attr("data-visibility") == Some(UNCOUNTED),
        indices,
    }
}

/// Copy the children of `source` below `parent`, recursively
fn graft(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let Some(mut target) = tree.get_mut(parent) else {
            return;
        };
        let id = target.append(child.value().clone()).id();
        graft(tree, id, child);
    }
}
