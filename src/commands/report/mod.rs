//! Implementation of the `sst-report report` command.
//!
//! # Run Steps
//!
//! 1. Require a base reference
//! 2. Diff the SST and stations tables against it; both empty -> no changes
//! 3. Load the current tables and build the reference maps
//! 4. Parse the SST diff; no rows -> no changes
//! 5. Sort the affected groups by (type_cd, line_group_cd)
//! 6. Classify and render up to `max_groups` groups; none rendered -> no changes
//! 7. Assemble the size-bounded document
//! 8. Write the report and emit `has_changes=true`
//!
//! Every "no changes" outcome prints a status line, writes no report and
//! emits `has_changes=false`.

use crate::classify::{affected_groups, classify, group_stations, sorted_groups};
use crate::cli::ReportArgs;
use crate::config::Config;
use crate::diff::{file_diff, parse_diff};
use crate::error::{ReportError, Result};
use crate::fs::atomic_write_file;
use crate::reference::ReferenceMaps;
use crate::report::{DocumentParts, Tally, assemble, format_group};
use crate::signal::write_signal;
use crate::table::{Table, load_table};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};


/// Why a run ended without a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoChangeReason {
    /// Neither watched table differs from the base reference.
    EmptyDiff,
    /// The SST diff contained no data rows.
    NoRecords,
    /// No affected group had anything to show.
    NoRenderableGroups,
}

impl fmt::Display for NoChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            NoChangeReason::EmptyDiff => "No changes to the station or stopping-pattern tables.",
            NoChangeReason::NoRecords => "No stopping-pattern rows changed.",
            NoChangeReason::NoRenderableGroups => "No stopping-pattern groups to report.",
        };
        f.write_str(message)
    }
}

/// A rendered report.
#[derive(Debug, Clone)]
pub struct Report {
    pub document: String,
    pub tally: Tally,
    /// Affected groups before the display cap.
    pub total_groups: usize,
    pub rendered_groups: usize,
}

/// Result of a run that did not fail.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    NoChanges(NoChangeReason),
    Changes(Report),
}

/// The current-revision tables a report needs.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub stations: Table,
    pub types: Table,
    pub lines: Table,
    pub sst: Table,
}

impl Tables {
    /// Load every table named in `config`, relative to `repo`.
    pub fn load(repo: &Path, config: &Config) -> Result<Self> {
        Ok(Self {
            stations: load_table(repo.join(&config.stations_csv))?,
            types: load_table(repo.join(&config.types_csv))?,
            lines: load_table(repo.join(&config.lines_csv))?,
            sst: load_table(repo.join(&config.sst_csv))?,
        })
    }
}

/// Execute the `sst-report report` command.
///
/// # Exit Codes
///
/// - 0: Report written, or nothing to report
/// - 1: User error (missing base reference, bad config)
/// - 3: Git error (diff failed)
/// - 4: Data error (unreadable table, unwritable report)
/// - 5: Internal consistency error
pub fn cmd_report(args: ReportArgs) -> Result<()> {
    // ========================================================================
    // Phase 1: Inputs
    // ========================================================================

    let base_ref = args
        .base_ref
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| {
            ReportError::UserError(
                "base reference is required: pass --base-ref or set BASE_REF".to_string(),
            )
        })?;
    let config = Config::load_or_default(args.data.config.as_deref())?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    let sink = args.github_output.as_deref();

    // ========================================================================
    // Phase 2: Diff, classify, render
    // ========================================================================

    let outcome = run_report(&args.data.repo, &base_ref, &config)?;

    // ========================================================================
    // Phase 3: Emit
    // ========================================================================

    match outcome {
        ReportOutcome::NoChanges(reason) => {
            println!("{}", reason);
            write_signal(sink, false)
        }
        ReportOutcome::Changes(report) => {
            atomic_write_file(&output, &report.document)?;
            println!(
                "Wrote {} ({} of {} groups: {})",
                output.display(),
                report.rendered_groups,
                report.total_groups,
                report.tally.summary_line()
            );
            write_signal(sink, true)
        }
    }
}

/// Diff the watched tables against `base_ref` and render the report.
pub fn run_report(repo: &Path, base_ref: &str, config: &Config) -> Result<ReportOutcome> {
    let sst_diff = file_diff(repo, base_ref, &config.sst_csv)?;
    let stations_diff = file_diff(repo, base_ref, &config.stations_csv)?;
    debug!(
        sst_bytes = sst_diff.len(),
        stations_bytes = stations_diff.len(),
        "fetched diffs"
    );

    if sst_diff.trim().is_empty() && stations_diff.trim().is_empty() {
        return Ok(ReportOutcome::NoChanges(NoChangeReason::EmptyDiff));
    }

    let tables = Tables::load(repo, config)?;
    build_report(&sst_diff, &tables, config)
}

/// Render the report for an SST diff against already-loaded tables.
pub fn build_report(sst_diff: &str, tables: &Tables, config: &Config) -> Result<ReportOutcome> {
    let maps = ReferenceMaps::build(
        &tables.stations.records,
        &tables.types.records,
        &tables.lines.records,
    );

    let diff = parse_diff(sst_diff, &tables.sst.header);
    info!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        "parsed SST diff"
    );
    if diff.is_empty() {
        return Ok(ReportOutcome::NoChanges(NoChangeReason::NoRecords));
    }

    let groups = sorted_groups(affected_groups(&diff.added, &diff.removed));
    if groups.len() > config.max_groups {
        warn!(
            total = groups.len(),
            shown = config.max_groups,
            "too many affected groups; rendering the first ones only"
        );
    }

    let mut tally = Tally::default();
    let mut sections = Vec::new();

    for key in groups.iter().take(config.max_groups) {
        let classification = classify(&diff.added, &diff.removed, key)?;
        let stations = group_stations(&tables.sst.records, key);

        if stations.is_empty() && classification.deleted_stations.is_empty() {
            warn!(
                type_cd = %key.type_cd,
                line_group_cd = %key.line_group_cd,
                "skipping group with nothing to show"
            );
            continue;
        }

        tally.add(&classification);
        sections.push(format_group(key, &classification, &stations, &maps));
    }

    if sections.is_empty() {
        return Ok(ReportOutcome::NoChanges(NoChangeReason::NoRenderableGroups));
    }

    let document = assemble(&DocumentParts {
        tally,
        total_groups: groups.len(),
        max_groups: config.max_groups,
        sections: &sections,
        max_chars: config.max_report_chars,
    });

    Ok(ReportOutcome::Changes(Report {
        document,
        tally,
        total_groups: groups.len(),
        rendered_groups: sections.len(),
    }))
}
