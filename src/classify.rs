//! Change classification for stopping-pattern groups.
//!
//! A group is every SST row sharing a `(type_cd, line_group_cd)` pair. For each
//! group touched by a diff we work out which stations were added, deleted, or
//! had their `pass` code changed.

use crate::error::{ReportError, Result};
use crate::reference::index_by;
use crate::table::Record;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Identifies one stopping-pattern group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub type_cd: String,
    pub line_group_cd: String,
}

impl GroupKey {
    pub fn new(type_cd: impl Into<String>, line_group_cd: impl Into<String>) -> Self {
        Self {
            type_cd: type_cd.into(),
            line_group_cd: line_group_cd.into(),
        }
    }

    /// The group a record belongs to, if it carries both key columns.
    pub fn of(record: &Record) -> Option<Self> {
        Some(Self::new(
            record.get("type_cd")?,
            record.get("line_group_cd")?,
        ))
    }

    pub fn contains(&self, record: &Record) -> bool {
        record.get("type_cd") == Some(self.type_cd.as_str())
            && record.get("line_group_cd") == Some(self.line_group_cd.as_str())
    }
}

impl Ord for GroupKey {
    /// Numeric order on both codes; non-numeric codes sort after numeric ones.
    fn cmp(&self, other: &Self) -> Ordering {
        code_key(&self.type_cd)
            .cmp(&code_key(&other.type_cd))
            .then_with(|| code_key(&self.line_group_cd).cmp(&code_key(&other.line_group_cd)))
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn code_key(code: &str) -> (u8, i64, &str) {
    match code.trim().parse::<i64>() {
        Ok(n) => (0, n, code),
        Err(_) => (1, 0, code),
    }
}

/// What changed inside one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Stations present on both sides: the `pass` value changed.
    pub changed_stations: BTreeSet<String>,
    pub new_stations: BTreeSet<String>,
    pub deleted_stations: BTreeSet<String>,
    /// Station code → (old pass, new pass).
    pub pass_changes: BTreeMap<String, (i64, i64)>,
    /// The group had no rows before this revision.
    pub is_new: bool,
    /// The group has no rows in this revision.
    pub is_deleted: bool,
    /// Removed rows of this group, kept to name stations of deleted groups.
    pub removed_records: Vec<Record>,
}

impl Classification {
    /// Every station that should be emphasized in the station list.
    pub fn affected_stations(&self) -> HashSet<&str> {
        self.new_stations
            .iter()
            .chain(&self.deleted_stations)
            .chain(&self.changed_stations)
            .map(String::as_str)
            .collect()
    }
}

/// Distinct groups touched by any added or removed record.
pub fn affected_groups(added: &[Record], removed: &[Record]) -> HashSet<GroupKey> {
    added.iter().chain(removed).filter_map(GroupKey::of).collect()
}

/// Affected groups in report order.
pub fn sorted_groups(groups: HashSet<GroupKey>) -> Vec<GroupKey> {
    let mut groups: Vec<GroupKey> = groups.into_iter().collect();
    groups.sort();
    groups
}

/// Current-revision rows of one group, in file (route) order.
pub fn group_stations<'a>(all_sst: &'a [Record], key: &GroupKey) -> Vec<&'a Record> {
    all_sst.iter().filter(|r| key.contains(r)).collect()
}

/// Classify the changes a diff makes to one group.
///
/// # Returns
///
/// * `Ok(Classification)` - The group's station-level changes
/// * `Err(ReportError::Internal)` - A changed station lacks a row on one side,
///   or its `pass` value is not an integer
pub fn classify(added: &[Record], removed: &[Record], key: &GroupKey) -> Result<Classification> {
    let group_added: Vec<Record> = added.iter().filter(|r| key.contains(r)).cloned().collect();
    let group_removed: Vec<Record> = removed.iter().filter(|r| key.contains(r)).cloned().collect();

    let added_codes = station_codes(&group_added);
    let removed_codes = station_codes(&group_removed);

    let changed_stations: BTreeSet<String> =
        added_codes.intersection(&removed_codes).cloned().collect();
    let new_stations = added_codes.difference(&removed_codes).cloned().collect();
    let deleted_stations = removed_codes.difference(&added_codes).cloned().collect();

    let is_new = group_removed.is_empty() && !group_added.is_empty();
    let is_deleted = group_added.is_empty() && !group_removed.is_empty();

    let added_by_code = index_by(&group_added, "station_cd");
    let removed_by_code = index_by(&group_removed, "station_cd");

    let mut pass_changes = BTreeMap::new();
    for code in &changed_stations {
        let (Some(old), Some(new)) = (removed_by_code.get(code), added_by_code.get(code)) else {
            return Err(ReportError::Internal(format!(
                "station {} of group {}/{} is changed but missing from one side",
                code, key.type_cd, key.line_group_cd
            )));
        };
        pass_changes.insert(code.clone(), (pass_value(old, key)?, pass_value(new, key)?));
    }

    Ok(Classification {
        changed_stations,
        new_stations,
        deleted_stations,
        pass_changes,
        is_new,
        is_deleted,
        removed_records: group_removed,
    })
}

fn station_codes(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|r| r.get("station_cd"))
        .map(String::from)
        .collect()
}

fn pass_value(record: &Record, key: &GroupKey) -> Result<i64> {
    let raw = record.value("pass");
    raw.trim().parse().map_err(|_| {
        ReportError::Internal(format!(
            "station {} of group {}/{} has non-integer pass value '{}'",
            record.value("station_cd"),
            key.type_cd,
            key.line_group_cd,
            raw
        ))
    })
}
