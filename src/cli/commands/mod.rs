mod build;
mod list;

pub use build::handle_build_command;
pub use list::handle_list_command;

use revealtoc::config::{self, DeckConfig};
use revealtoc::BoxResult;

use crate::cli::types::TocArgs;

/// Load the configuration file if given and lay the command line options over it
fn load_deck_config(args: &TocArgs) -> BoxResult<DeckConfig> {
    let mut deck_config = config::load_config_or_default(args.config.as_ref())?;
    deck_config.apply_overrides(&args.overrides());
    config::validate_options(&deck_config.toc_options())?;
    Ok(deck_config)
}
