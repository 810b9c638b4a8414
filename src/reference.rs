//! Lookup maps over the current-revision reference tables.

use crate::table::Record;
use std::collections::HashMap;

/// Identifier → record.
pub type RecordMap = HashMap<String, Record>;

/// Station, train-type and line lookups built once per run.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaps {
    pub stations: RecordMap,
    pub types: RecordMap,
    pub lines: RecordMap,
}

impl ReferenceMaps {
    pub fn build(stations: &[Record], types: &[Record], lines: &[Record]) -> Self {
        Self {
            stations: station_map(stations),
            types: type_map(types),
            lines: line_map(lines),
        }
    }

    /// Display name of a station, falling back to its raw code.
    pub fn station_name<'a>(&'a self, station_cd: &'a str) -> &'a str {
        self.stations
            .get(station_cd)
            .and_then(|s| s.get("station_name"))
            .unwrap_or(station_cd)
    }
}

/// Index records by the value in `column`. Later rows win on duplicate keys;
/// rows without the column are skipped.
pub fn index_by(records: &[Record], column: &str) -> RecordMap {
    records
        .iter()
        .filter_map(|r| r.get(column).map(|key| (key.to_string(), r.clone())))
        .collect()
}

pub fn station_map(records: &[Record]) -> RecordMap {
    index_by(records, "station_cd")
}

pub fn type_map(records: &[Record]) -> RecordMap {
    index_by(records, "type_cd")
}

pub fn line_map(records: &[Record]) -> RecordMap {
    index_by(records, "line_cd")
}
