use serde::{Serialize, Deserialize};

/// Attribute value marking a slide as excluded from slide numbers
pub const UNCOUNTED: &str = "uncounted";

/// A direct child node of a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideNode {
    /// Lower-cased element name, `None` for text and other non-element nodes
    pub tag: Option<String>,
    /// Concatenated text of the node and its descendants
    pub text: String,
}

impl SlideNode {
    pub fn element(tag: &str, text: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            text: text.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            tag: None,
            text: text.to_string(),
        }
    }
}

/// Position of a slide in reveal.js terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideIndices {
    /// Horizontal index, shared by every slide of a vertical stack
    pub h: usize,
    /// Vertical index within a stack, 0 for standalone slides
    pub v: usize,
}

/// A read-only view of one slide of the presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub children: Vec<SlideNode>,
    /// Set by `data-visibility="uncounted"`
    pub uncounted: bool,
    pub indices: SlideIndices,
}

impl Slide {
    pub fn new(children: Vec<SlideNode>, h: usize) -> Self {
        Self {
            children,
            uncounted: false,
            indices: SlideIndices { h, v: 0 },
        }
    }

    pub fn with_vertical(mut self, v: usize) -> Self {
        self.indices.v = v;
        self
    }

    pub fn uncounted(mut self) -> Self {
        self.uncounted = true;
        self
    }
}
