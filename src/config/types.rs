use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use log::debug;

use crate::config::defaults;
use crate::toc::TitleTagAllowList;

/// Heading tags as written in configuration.
///
/// A comma-separated string and a sequence of strings are both accepted;
/// anything else is kept as-is and later ignored in favour of the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagSelectorSetting {
    Text(String),
    List(Vec<String>),
    Other(serde_yaml::Value),
}

/// Table of contents options as authored in the deck configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocConfig {
    /// Heading element used for the generated slide's own title
    pub title_tag: Option<String>,

    /// Heading tags that may provide a slide's title
    pub title_tag_selector: Option<TagSelectorSetting>,

    /// Title text of the generated slide
    pub title: Option<String>,

    /// 1-based position of the generated slide
    pub position: Option<usize>,

    /// Reveal table cells one by one as fragments
    pub fade_in_elements: Option<bool>,

    /// Number of table columns
    pub number_of_columns: Option<usize>,

    /// Start the slide counter at 1 instead of 0
    pub ignore_first_slide: Option<bool>,

    /// Entry template using `{title}`, `{pagenr}` and `{chapternr}`
    pub toc_format: Option<String>,
}

impl TocConfig {
    /// Overlay every option set in `other` on top of this one
    pub fn merge(&mut self, other: &TocConfig) {
        if other.title_tag.is_some() {
            self.title_tag = other.title_tag.clone();
        }
        if other.title_tag_selector.is_some() {
            self.title_tag_selector = other.title_tag_selector.clone();
        }
        if other.title.is_some() {
            self.title = other.title.clone();
        }
        if other.position.is_some() {
            self.position = other.position;
        }
        if other.fade_in_elements.is_some() {
            self.fade_in_elements = other.fade_in_elements;
        }
        if other.number_of_columns.is_some() {
            self.number_of_columns = other.number_of_columns;
        }
        if other.ignore_first_slide.is_some() {
            self.ignore_first_slide = other.ignore_first_slide;
        }
        if other.toc_format.is_some() {
            self.toc_format = other.toc_format.clone();
        }
    }

    /// Resolve the authored options into the values the generator runs with.
    ///
    /// Empty strings and zero numbers count as unset, and
    /// `ignoreFirstSlide` only defaults to true when it is absent.
    pub fn resolve(&self) -> TocOptions {
        let title_tag_selector = match &self.title_tag_selector {
            Some(TagSelectorSetting::Text(selector)) => TitleTagAllowList::from_selector(selector),
            Some(TagSelectorSetting::List(tags)) => TitleTagAllowList::from_tags(tags),
            Some(TagSelectorSetting::Other(value)) => {
                debug!("Ignoring titleTagSelector {:?}, using the default heading tags", value);
                TitleTagAllowList::default()
            }
            None => TitleTagAllowList::default(),
        };

        TocOptions {
            title_tag: non_empty(&self.title_tag).unwrap_or_else(defaults::default_title_tag),
            title_tag_selector,
            title: non_empty(&self.title).unwrap_or_else(defaults::default_title),
            position: self.position.filter(|p| *p > 0).unwrap_or(defaults::DEFAULT_POSITION),
            fade_in_elements: self.fade_in_elements.unwrap_or(false),
            number_of_columns: self
                .number_of_columns
                .filter(|c| *c > 0)
                .unwrap_or(defaults::DEFAULT_NUMBER_OF_COLUMNS),
            ignore_first_slide: self.ignore_first_slide.unwrap_or(defaults::DEFAULT_IGNORE_FIRST_SLIDE),
            toc_format: self.toc_format.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Resolved table of contents options
#[derive(Debug, Clone, PartialEq)]
pub struct TocOptions {
    /// Element name, checked by `validate_options` before it reaches markup
    pub title_tag: String,
    pub title_tag_selector: TitleTagAllowList,
    pub title: String,
    pub position: usize,
    pub fade_in_elements: bool,
    pub number_of_columns: usize,
    pub ignore_first_slide: bool,
    pub toc_format: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocConfig::default().resolve()
    }
}

/// The presentation's configuration object.
///
/// Only `tableofcontents` is interpreted, other keys are carried along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub tableofcontents: Option<TocConfig>,

    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl DeckConfig {
    /// Resolved table of contents options, defaults when the section is missing
    pub fn toc_options(&self) -> TocOptions {
        self.tableofcontents.clone().unwrap_or_default().resolve()
    }

    /// Apply command line overrides to the table of contents section
    pub fn apply_overrides(&mut self, overrides: &TocConfig) {
        self.tableofcontents
            .get_or_insert_with(TocConfig::default)
            .merge(overrides);
    }
}
