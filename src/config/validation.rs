use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::config::TocOptions;
use crate::toc::PLACEHOLDERS;
use crate::utils::error::{BoxResult, TocError};

lazy_static! {
    static ref ELEMENT_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap();
}

/// Validate resolved table of contents options
pub fn validate_options(options: &TocOptions) -> BoxResult<()> {
    validate_title_tag(options)?;
    validate_selector(options);
    validate_format(options);

    Ok(())
}

/// The heading tag is written into the document as an element name
fn validate_title_tag(options: &TocOptions) -> BoxResult<()> {
    if !ELEMENT_NAME_REGEX.is_match(&options.title_tag) {
        return Err(TocError::Config(format!(
            "titleTag is not a valid element name: {}", options.title_tag
        )).into());
    }

    Ok(())
}

fn validate_selector(options: &TocOptions) {
    let tags = options.title_tag_selector.tags();
    if tags.iter().all(|tag| tag.is_empty()) {
        warn!("titleTagSelector is empty, no slide will contribute an entry");
    } else if tags.iter().any(|tag| tag.is_empty()) {
        warn!("titleTagSelector contains an empty item: {:?}", tags);
    }
}

fn validate_format(options: &TocOptions) {
    let format = &options.toc_format;
    if !format.is_empty() && !PLACEHOLDERS.iter().any(|placeholder| format.contains(placeholder)) {
        warn!("tocFormat contains none of {:?}, every entry will read '{}'", PLACEHOLDERS, format);
    }
}
