use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use revealtoc::config::{TagSelectorSetting, TocConfig};

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "revealtoc")]
#[command(about = "Adds a table of contents slide to reveal.js presentations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Insert a table of contents slide into presentations
    #[command(alias = "b")]
    Build {
        /// HTML presentation, or a directory searched for them
        input: PathBuf,

        /// Output file, or output directory when INPUT is a directory
        /// (defaults to rewriting the input in place)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Print the table of contents without modifying anything
    #[command(alias = "l")]
    List {
        /// HTML presentation, or a directory searched for them
        input: PathBuf,

        #[command(flatten)]
        toc: TocArgs,
    },
}

/// Table of contents options shared by all subcommands
#[derive(Args, Debug, Default)]
pub struct TocArgs {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Title of the generated slide
    #[arg(long)]
    pub title: Option<String>,

    /// Heading element of the generated slide
    #[arg(long, value_name = "TAG")]
    pub title_tag: Option<String>,

    /// Comma-separated heading tags that provide slide titles
    #[arg(long, value_name = "TAGS")]
    pub selector: Option<String>,

    /// 1-based position of the generated slide
    #[arg(short, long)]
    pub position: Option<usize>,

    /// Number of table columns
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Entry template using {title}, {pagenr} and {chapternr}
    #[arg(short, long, value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// Reveal entries one by one
    #[arg(long, default_value_t = false)]
    pub fade_in: bool,

    /// Start the slide counter at 0 instead of 1
    #[arg(long, default_value_t = false)]
    pub include_first_slide: bool,
}

impl TocArgs {
    /// Options given on the command line, to be laid over the config file
    pub fn overrides(&self) -> TocConfig {
        TocConfig {
            title_tag: self.title_tag.clone(),
            title_tag_selector: self.selector.clone().map(TagSelectorSetting::Text),
            title: self.title.clone(),
            position: self.position,
            fade_in_elements: self.fade_in.then_some(true),
            number_of_columns: self.columns,
            ignore_first_slide: self.include_first_slide.then_some(false),
            toc_format: self.format.clone(),
        }
    }
}
