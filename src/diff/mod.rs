//! Diff retrieval and parsing for CSV tables.
//!
//! This module turns `git diff` output for a single CSV file into the
//! records that were added and removed:
//! - Diff text from `git diff {base} -- {path}`
//! - `+`/`-` rows parsed as CSV and keyed by the table's header
//! - File markers, hunk headers, context lines and repeated headers skipped

mod api;
mod parser;


// Re-export public API
pub use api::file_diff;
pub use parser::{DiffRecords, parse_diff};
