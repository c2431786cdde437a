//! envcreate: generate a project's `.env` file during installation.
//!
//! This is the main entry point for the `envcreate` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use envcreate::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let base_dir = cli.base_dir.clone();
    let config = cli.config.clone();
    match commands::dispatch(base_dir.as_deref(), config.as_deref(), cli.into_command()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
