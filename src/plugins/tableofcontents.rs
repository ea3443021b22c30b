use log::debug;

use crate::config::validate_options;
use crate::plugins::{Hook, HookContext, HookResult, Plugin};
use crate::toc::TocBuilder;

/// Inserts a table of contents slide when the presentation initializes.
///
/// Options are read from the `tableofcontents` section of the deck config.
#[derive(Debug, Default)]
pub struct TableOfContentsPlugin {
    inserted: bool,
}

impl TableOfContentsPlugin {
    pub const ID: &'static str = "tableofcontents";

    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slide has been inserted
    pub fn inserted(&self) -> bool {
        self.inserted
    }
}

impl Plugin for TableOfContentsPlugin {
    fn id(&self) -> &str {
        Self::ID
    }

    fn handle_hook(&mut self, hook: &Hook, context: &mut HookContext<'_>) -> HookResult {
        if *hook != Hook::Init {
            return HookResult::Continue;
        }
        if self.inserted {
            debug!("Table of contents already inserted");
            return HookResult::Continue;
        }

        let options = context.config.toc_options();
        if let Err(e) = validate_options(&options) {
            return HookResult::Error(e.to_string());
        }

        self.inserted = TocBuilder::new(options).apply(&mut *context.deck);
        if self.inserted {
            HookResult::Continue
        } else {
            HookResult::Error("table of contents slide was not inserted".to_string())
        }
    }
}
