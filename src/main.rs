//! modify-patchlist: keeps the user guide's OPatch download table in step
//! with the patch manifest.
//!
//! This is the main entry point. It parses arguments, sets up logging, runs
//! the patch pipeline, and maps errors to exit codes.

mod cli;
mod commands;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod inserter;
pub mod layout;
mod logging;
pub mod manifest;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing(&cli);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
