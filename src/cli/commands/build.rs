use log::{info, warn};
use std::path::{Path, PathBuf};

use revealtoc::deck::HtmlDeck;
use revealtoc::plugins::PluginHost;
use revealtoc::utils::fs;
use revealtoc::BoxResult;

use crate::cli::commands::load_deck_config;
use crate::cli::types::TocArgs;

/// Handle the build command.
///
/// Returns the number of presentations written. A presentation that did
/// not receive a table of contents is reported and left untouched.
pub fn handle_build_command(
    input: &Path,
    output: Option<&PathBuf>,
    args: &TocArgs,
) -> BoxResult<usize> {
    let deck_config = load_deck_config(args)?;

    let files = fs::list_html_files(input)?;
    if files.is_empty() {
        warn!("No HTML presentations found in {}", input.display());
        return Ok(0);
    }

    let mut written = 0;
    for file in &files {
        let mut deck = match HtmlDeck::from_file(file) {
            Ok(deck) => deck,
            Err(e) => {
                warn!("Skipping {}: {}", file.display(), e);
                continue;
            }
        };
        let mut host = PluginHost::with_table_of_contents(deck_config.clone());

        if host.initialize(&mut deck) > 0 {
            warn!("Skipping {}: no table of contents inserted", file.display());
            continue;
        }

        let destination = destination_for(input, file, output);
        fs::write_file(&destination, &deck.to_html())?;
        info!("Wrote {}", destination.display());
        written += 1;
    }

    info!("Added a table of contents to {} of {} presentation(s)", written, files.len());
    Ok(written)
}

/// Where the rewritten `file` goes: in place, the output file, or the
/// same relative path below the output directory
fn destination_for(input: &Path, file: &Path, output: Option<&PathBuf>) -> PathBuf {
    match output {
        None => file.to_path_buf(),
        Some(out) if input.is_dir() => out.join(file.strip_prefix(input).unwrap_or(file)),
        Some(out) => out.clone(),
    }
}
