use log::{debug, error, info, warn};

use crate::config::{validate_options, TocOptions};
use crate::deck::Deck;
use crate::toc::formatter::{format_entries, FormatOptions, TocEntry};
use crate::toc::layout::Grid;
use crate::toc::render::render_section;

/// The generated table of contents slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSlide {
    pub title_tag: String,
    pub title: String,
    pub entries: Vec<TocEntry>,
    pub grid: Grid,
}

impl TocSlide {
    pub fn to_html(&self) -> String {
        render_section(&self.title_tag, &self.title, &self.grid)
    }
}

/// Builds a table of contents slide from a presentation's own slides
#[derive(Debug, Clone, Default)]
pub struct TocBuilder {
    options: TocOptions,
}

impl TocBuilder {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TocOptions {
        &self.options
    }

    /// Extract, format and lay out the entries of `deck`.
    ///
    /// A presentation without a slide collection yields an empty table.
    pub fn build(&self, deck: &dyn Deck) -> TocSlide {
        let entries = match deck.slides() {
            Some(slides) => {
                let total = deck.total_slides().min(slides.len());
                debug!("Scanning {} slides for titles", total);
                format_entries(
                    &slides[..total],
                    &self.options.title_tag_selector,
                    &FormatOptions::from(&self.options),
                )
            }
            None => {
                warn!("Presentation has no slides, table of contents left empty");
                Vec::new()
            }
        };

        let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
        let grid = Grid::layout(&texts, self.options.number_of_columns, self.options.fade_in_elements);
        debug!("{} entries laid out in {} rows", grid.len(), grid.row_count);

        TocSlide {
            title_tag: self.options.title_tag.clone(),
            title: self.options.title.clone(),
            entries,
            grid,
        }
    }

    /// Build the slide and insert it at the configured position.
    ///
    /// Options are validated first, as the heading tag is written into the
    /// document unescaped. Failures are logged, never propagated; returns
    /// whether a slide was inserted.
    pub fn apply(&self, deck: &mut dyn Deck) -> bool {
        if let Err(e) = validate_options(&self.options) {
            error!("Invalid table of contents options: {}", e);
            return false;
        }

        let slide = self.build(&*deck);

        match deck.insert_slide(self.options.position, &slide.to_html()) {
            Ok(()) => {
                info!(
                    "Inserted table of contents with {} entries at position {}",
                    slide.entries.len(),
                    self.options.position
                );
                true
            }
            Err(e) => {
                error!("Failed to insert table of contents: {}", e);
                false
            }
        }
    }
}
