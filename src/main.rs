//! lsedit: open source files at a line and column in an external editor.
//!
//! This is the main entry point for the `lsedit` CLI. It parses arguments,
//! initializes logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

use lsedit::cli::Cli;
use lsedit::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command, cli.project.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
