use std::path::Path;

use revealtoc::deck::HtmlDeck;
use revealtoc::toc::{TocBuilder, TocSlide};
use revealtoc::utils::fs;
use revealtoc::BoxResult;

use crate::cli::commands::load_deck_config;
use crate::cli::types::TocArgs;

/// Handle the list command
pub fn handle_list_command(input: &Path, args: &TocArgs) -> BoxResult<()> {
    let deck_config = load_deck_config(args)?;
    let builder = TocBuilder::new(deck_config.toc_options());

    for file in fs::list_html_files(input)? {
        let deck = HtmlDeck::from_file(&file)?;
        println!("{}", file.display());
        print!("{}", format_listing(&builder.build(&deck)));
    }

    Ok(())
}

/// Plain-text rendering of the table, one line per row
fn format_listing(slide: &TocSlide) -> String {
    let mut listing = format!("  {} ({} entries)\n", slide.title, slide.entries.len());
    for row in &slide.grid.rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.text.as_str()).collect();
        listing.push_str(&format!("    {}\n", cells.join(" | ")));
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use revealtoc::deck::{MemoryDeck, Slide, SlideNode};

    #[test]
    fn test_format_listing() {
        let slides = ["Intro", "A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(h, title)| Slide::new(vec![SlideNode::element("h1", title)], h))
            .collect();
        let slide = TocBuilder::default().build(&MemoryDeck::new(slides));

        assert_eq!(
            format_listing(&slide),
            "  Table of Contents (5 entries)\n    Intro | C\n    A | D\n    B\n"
        );
    }
}
