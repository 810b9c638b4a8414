//! sst-report: stopping-pattern change reports for railway station data.
//!
//! This is the main entry point for the `sst-report` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;
pub mod classify;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
mod logging;
pub mod reference;
pub mod report;
pub mod signal;
pub mod stop_condition;
pub mod table;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
