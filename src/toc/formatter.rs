use log::debug;

use crate::config::TocOptions;
use crate::deck::Slide;
use crate::toc::extractor::{extract_title, TitleTagAllowList};

/// The generated slide shifts every following slide number by one
pub const HORIZONTAL_OFFSET_FROM_TOC: usize = 1;

/// Placeholders understood in entry templates
pub const PLACEHOLDERS: [&str; 3] = ["{title}", "{pagenr}", "{chapternr}"];

/// How entries are numbered and rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Start the slide counter at 1 instead of 0
    pub skip_first_slide: bool,
    /// Entry template, empty for the bare title
    pub format: String,
    pub horizontal_offset_base: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            skip_first_slide: true,
            format: String::new(),
            horizontal_offset_base: HORIZONTAL_OFFSET_FROM_TOC,
        }
    }
}

impl From<&TocOptions> for FormatOptions {
    fn from(options: &TocOptions) -> Self {
        Self {
            skip_first_slide: options.ignore_first_slide,
            format: options.toc_format.clone(),
            horizontal_offset_base: HORIZONTAL_OFFSET_FROM_TOC,
        }
    }
}

/// One line of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Display text
    pub text: String,
    /// 1-based number among produced entries
    pub chapter: usize,
    /// Slide number the entry points to, once the generated slide is in place
    pub page: usize,
    /// Value of the running slide counter for the producing slide
    pub counter: usize,
}

/// Slide number of `slide` as shown after the generated slide is inserted
pub fn page_number(slide: &Slide, horizontal_offset_base: usize) -> usize {
    let horizontal_offset = if slide.uncounted { 0 } else { 1 };
    slide.indices.h + horizontal_offset + horizontal_offset_base
}

/// Substitute every placeholder occurrence in `template`.
///
/// Placeholders are replaced in the order title, page, chapter, so page and
/// chapter tokens appearing in the title are filled in as well.
pub fn render_template(template: &str, title: &str, page: usize, chapter: usize) -> String {
    let values = [title.to_string(), page.to_string(), chapter.to_string()];
    PLACEHOLDERS
        .iter()
        .zip(values.iter())
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}

/// Produce the formatted entries for `slides`, in document order.
///
/// Slides without a title contribute nothing. Every slide takes part in
/// extraction; `skip_first_slide` only moves the counter's start to 1.
pub fn format_entries(
    slides: &[Slide],
    allow_list: &TitleTagAllowList,
    options: &FormatOptions,
) -> Vec<TocEntry> {
    let start = if options.skip_first_slide { 1 } else { 0 };
    let mut entries: Vec<TocEntry> = Vec::new();

    for (counter, slide) in (start..).zip(slides) {
        let Some(title) = extract_title(slide, allow_list) else {
            debug!("Slide {} has no title heading, skipping", counter);
            continue;
        };

        let chapter = entries.len() + 1;
        let page = page_number(slide, options.horizontal_offset_base);
        let text = if options.format.is_empty() {
            title
        } else {
            render_template(&options.format, &title, page, chapter)
        };

        debug!("Slide {}: entry {} '{}'", counter, chapter, text);
        entries.push(TocEntry {
            text,
            chapter,
            page,
            counter,
        });
    }

    entries
}
