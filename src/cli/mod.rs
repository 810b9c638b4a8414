//! CLI argument parsing for sst-report.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sst-report: stopping-pattern change reports for station data.
///
/// Compares the station/station-type table against a base git reference
/// and renders the affected train-type groups as Markdown for review.
#[derive(Parser, Debug)]
#[command(name = "sst-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for sst-report.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a stopping-pattern change report.
    ///
    /// Diffs the SST and stations tables against the base reference, writes
    /// the Markdown report when anything changed, and emits `has_changes`.
    Report(ReportArgs),

    /// Check that every SST row references a known station and train type.
    Validate(ValidateArgs),
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Repository containing the CSV tables.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// YAML config file overriding table paths and report limits.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `report` command.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Git reference to compare against (branch, tag or commit).
    #[arg(long, env = "BASE_REF")]
    pub base_ref: Option<String>,

    /// Report destination (overrides `output_path` from config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File receiving the `has_changes` output; printed to stdout when unset.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
