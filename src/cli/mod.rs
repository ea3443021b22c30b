pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::process::ExitCode;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::log_level(cli.debug, cli.quiet));

    let result = match &cli.command {
        types::Commands::Build { input, output, toc } => {
            commands::handle_build_command(input, output.as_ref(), toc).map(|_| ())
        }
        types::Commands::List { input, toc } => commands::handle_list_command(input, toc),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
