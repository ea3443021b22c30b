//! Generates a table of contents slide for reveal.js presentations.
//!
//! Each slide's most important heading becomes an entry, entries are
//! optionally numbered from a template, laid out in a multi-column table
//! and inserted as a new slide.

pub mod config;
pub mod deck;
pub mod plugins;
pub mod toc;
pub mod utils;

pub use config::{DeckConfig, TocConfig, TocOptions};
pub use deck::{Deck, HtmlDeck, MemoryDeck, Slide, SlideNode};
pub use plugins::{PluginHost, TableOfContentsPlugin};
pub use toc::{TocBuilder, TocSlide};
pub use utils::error::{BoxResult, TocError};
