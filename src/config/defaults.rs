/// Default 1-based position of the generated slide
pub const DEFAULT_POSITION: usize = 2;

/// Default number of table columns
pub const DEFAULT_NUMBER_OF_COLUMNS: usize = 2;

/// Whether the slide counter starts at 1 by default
pub const DEFAULT_IGNORE_FIRST_SLIDE: bool = true;

/// Default heading element of the generated slide
pub fn default_title_tag() -> String {
    "h1".to_string()
}

/// Default title of the generated slide
pub fn default_title() -> String {
    "Table of Contents".to_string()
}

/// Default heading tags, most important first
pub fn default_title_tags() -> Vec<String> {
    (1..=6).map(|level| format!("h{}", level)).collect()
}
