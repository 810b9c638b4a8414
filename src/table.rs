//! CSV table loading.
//!
//! Tables are read with their first row as the header; every following row
//! becomes a [`Record`] keyed by column name. Values stay as strings.

use crate::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// One CSV row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Zip `values` against `header` positionally.
    ///
    /// Values beyond the header are dropped; columns beyond the values are absent.
    pub fn from_row<I, S>(header: &[String], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = header
            .iter()
            .cloned()
            .zip(values.into_iter().map(Into::into))
            .collect();
        Self { fields }
    }

    /// Value of `column`, if the row has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of `column`, or the empty string.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A fully loaded CSV table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

/// Load a whole CSV file.
///
/// # Returns
///
/// * `Ok(Table)` - Header plus one record per data row, in file order
/// * `Err(ReportError::DataError)` - File missing, unreadable, or not valid CSV
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| data_error(path, e))?;

    let header = header_strings(reader.headers().map_err(|e| data_error(path, e))?);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| data_error(path, e))?;
        records.push(Record::from_row(&header, row.iter()));
    }

    debug!(path = %path.display(), rows = records.len(), "loaded table");
    Ok(Table { header, records })
}

/// Read only the header row of a CSV file.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| data_error(path, e))?;
    let header = reader.headers().map_err(|e| data_error(path, e))?;
    Ok(header_strings(header))
}

/// Parse a single CSV line, honoring double-quote escaping.
///
/// Returns `None` for an empty line or one that is not valid CSV.
pub fn parse_row(line: &str) -> Option<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(row)) => Some(row.iter().map(String::from).collect()),
        _ => None,
    }
}

fn header_strings(header: &StringRecord) -> Vec<String> {
    header.iter().map(String::from).collect()
}

fn data_error(path: &Path, err: csv::Error) -> ReportError {
    ReportError::DataError(format!("failed to read '{}': {}", path.display(), err))
}
