//! Implementation of the `sst-report validate` command.
//!
//! Checks the current SST table for references that the report would have to
//! render with placeholders: unknown stations and unknown train types.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::reference::{RecordMap, station_map, type_map};
use crate::table::{Record, load_table, read_header};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Violations listed before the rest are summarized as a count.
const MAX_LISTED: usize = 20;

const STATION_COLUMNS: &[&str] = &["station_cd", "station_name", "station_name_r", "line_cd"];
const TYPE_COLUMNS: &[&str] = &["type_cd", "type_name", "type_name_r"];
const SST_COLUMNS: &[&str] = &["type_cd", "line_group_cd", "station_cd", "pass"];

/// A dangling reference in the SST table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UnknownStation { line: usize, station_cd: String },
    UnknownType { line: usize, type_cd: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownStation { line, station_cd } => {
                write!(f, "line {}: unrecognized station_cd {:?}", line, station_cd)
            }
            Violation::UnknownType { line, type_cd } => {
                write!(f, "line {}: unrecognized type_cd {:?}", line, type_cd)
            }
        }
    }
}

/// Execute the `sst-report validate` command.
///
/// # Exit Codes
///
/// - 0: Every SST row references a known station and type
/// - 1: User error (bad config)
/// - 2: Validation failure (missing columns or dangling references)
/// - 4: Data error (unreadable table)
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let config = Config::load_or_default(args.data.config.as_deref())?;
    let repo = args.data.repo.as_path();

    let stations_path = repo.join(&config.stations_csv);
    let types_path = repo.join(&config.types_csv);
    let sst_path = repo.join(&config.sst_csv);

    require_columns(&stations_path, STATION_COLUMNS)?;
    require_columns(&types_path, TYPE_COLUMNS)?;
    require_columns(&sst_path, SST_COLUMNS)?;

    let stations = station_map(&load_table(&stations_path)?.records);
    let types = type_map(&load_table(&types_path)?.records);
    let sst = load_table(&sst_path)?;

    let violations = find_violations(&sst.records, &stations, &types);
    if violations.is_empty() {
        println!("[VALID] No errors reported.");
        return Ok(());
    }

    for violation in violations.iter().take(MAX_LISTED) {
        eprintln!("[INVALID] {}", violation);
    }
    if violations.len() > MAX_LISTED {
        eprintln!("[INVALID] ... and {} more", violations.len() - MAX_LISTED);
    }

    Err(ReportError::ValidationError(format!(
        "{} dangling reference(s) in '{}'",
        violations.len(),
        config.sst_csv
    )))
}

/// Fail if the table at `path` lacks any of `columns`.
fn require_columns(path: &Path, columns: &[&str]) -> Result<()> {
    let header = read_header(path)?;
    let missing: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|c| !header.iter().any(|h| h == c))
        .collect();

    debug!(path = %path.display(), columns = header.len(), "checked header");
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::ValidationError(format!(
            "'{}' is missing column(s): {}",
            path.display(),
            missing.join(", ")
        )))
    }
}

/// Every SST row whose station or type is not in the reference maps.
///
/// `line` is the 1-based line in the CSV file (the header is line 1).
pub fn find_violations(sst: &[Record], stations: &RecordMap, types: &RecordMap) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, record) in sst.iter().enumerate() {
        let line = index + 2;

        let station_cd = record.value("station_cd");
        if !stations.contains_key(station_cd) {
            violations.push(Violation::UnknownStation {
                line,
                station_cd: station_cd.to_string(),
            });
        }

        let type_cd = record.value("type_cd");
        if !types.contains_key(type_cd) {
            violations.push(Violation::UnknownType {
                line,
                type_cd: type_cd.to_string(),
            });
        }
    }

    violations
}
