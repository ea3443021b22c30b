//! Table of contents generation: title extraction, entry formatting,
//! grid layout and rendering of the generated slide.

mod extractor;
mod formatter;
mod layout;
mod render;
mod builder;

pub use extractor::{extract_title, TitleTagAllowList};
pub use formatter::{
    format_entries, page_number, render_template, FormatOptions, TocEntry,
    HORIZONTAL_OFFSET_FROM_TOC, PLACEHOLDERS,
};
pub use layout::{row_count_for, Grid, GridCell};
pub use render::render_section;
pub use builder::{TocBuilder, TocSlide};
