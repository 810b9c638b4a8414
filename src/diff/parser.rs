//! Core parsing logic for CSV diffs.

use crate::table::{Record, parse_row};

/// Marker git prints after a line that lacks a trailing newline.
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Records added and removed by a diff, in diff order.
#[derive(Debug, Clone, Default)]
pub struct DiffRecords {
    pub added: Vec<Record>,
    pub removed: Vec<Record>,
}

impl DiffRecords {
    /// Returns true if the diff touched no data rows.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Parse unified diff text for one CSV file.
///
/// Each `+`/`-` line (other than the `+++`/`---` file markers) is parsed as a
/// CSV row and zipped against `header`. Rows shorter than the header and
/// repeated header rows are dropped. Duplicates are kept.
pub fn parse_diff(diff_text: &str, header: &[String]) -> DiffRecords {
    let mut records = DiffRecords::default();

    for line in diff_text.lines() {
        if line.starts_with("+++") || line.starts_with("---") || line == NO_NEWLINE_MARKER {
            continue;
        }

        if let Some(row) = line.strip_prefix('+') {
            if let Some(record) = parse_record(row, header) {
                records.added.push(record);
            }
        } else if let Some(row) = line.strip_prefix('-')
            && let Some(record) = parse_record(row, header)
        {
            records.removed.push(record);
        }
        // Context lines, hunk headers and "diff --git"/"index" lines carry no rows.
    }

    records
}

/// Parse one diff row body into a record, or `None` if it should be skipped.
fn parse_record(row: &str, header: &[String]) -> Option<Record> {
    let values = parse_row(row)?;
    if values.len() < header.len() {
        return None;
    }

    // A header line inside the hunk (e.g. the file was created or rewritten).
    if let (Some(first), Some(first_column)) = (values.first(), header.first())
        && first == first_column
    {
        return None;
    }

    Some(Record::from_row(header, values))
}
