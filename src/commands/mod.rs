//! Command implementations for sst-report.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

pub mod report;
pub mod validate;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Report(args) => report::cmd_report(args),
        Command::Validate(args) => validate::cmd_validate(args),
    }
}
