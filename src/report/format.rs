//! Markdown rendering of one classified group.

use crate::classify::{Classification, GroupKey};
use crate::reference::ReferenceMaps;
use crate::stop_condition::{pass_symbol, pass_symbol_raw};
use crate::table::Record;
use std::fmt::Write;

const BADGE_NEW: &str = "🆕";
const BADGE_DELETED: &str = "🗑️";
const BADGE_EDITED: &str = "✏️";

/// Line names served by a group, in order of first appearance.
///
/// Stations missing from the station map are skipped. A station whose line is
/// missing from the line map contributes its raw `line_cd`.
pub fn line_names_for_group<'a, I>(records: I, maps: &ReferenceMaps) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut names: Vec<String> = Vec::new();

    for record in records {
        let Some(station) = maps.stations.get(record.value("station_cd")) else {
            continue;
        };
        let line_cd = station.value("line_cd");
        let name = maps
            .lines
            .get(line_cd)
            .and_then(|line| line.get("line_name"))
            .unwrap_or(line_cd);

        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Render one group as a Markdown section.
///
/// `stations` are the group's current-revision rows in route order; empty for
/// a group that no longer exists.
pub fn format_group(
    key: &GroupKey,
    classification: &Classification,
    stations: &[&Record],
    maps: &ReferenceMaps,
) -> String {
    let mut out = String::new();

    let line_names = if stations.is_empty() {
        line_names_for_group(&classification.removed_records, maps)
    } else {
        line_names_for_group(stations.iter().copied(), maps)
    };
    let lines = if line_names.is_empty() {
        format!("line_group_{}", key.line_group_cd)
    } else {
        line_names.join(" / ")
    };

    let _ = writeln!(
        out,
        "### {} {}: {}",
        badge(classification),
        type_display_name(&key.type_cd, maps),
        lines
    );
    let _ = writeln!(
        out,
        "`type_cd={}` `line_group_cd={}`",
        key.type_cd, key.line_group_cd
    );
    out.push('\n');

    if let Some(summary) = change_summary(classification, maps) {
        let _ = writeln!(out, "変更内容: {}", summary);
        out.push('\n');
    }

    if !stations.is_empty() {
        write_station_table(&mut out, classification, stations, maps);
    }

    out
}

fn badge(classification: &Classification) -> &'static str {
    if classification.is_new {
        BADGE_NEW
    } else if classification.is_deleted {
        BADGE_DELETED
    } else {
        BADGE_EDITED
    }
}

/// `name (reading)`, `name`, or `type_{code}` when the type is unknown.
fn type_display_name(type_cd: &str, maps: &ReferenceMaps) -> String {
    let Some(train_type) = maps.types.get(type_cd) else {
        return format!("type_{}", type_cd);
    };

    let name = train_type.value("type_name");
    let reading = train_type.value("type_name_r");
    match (name.is_empty(), reading.is_empty()) {
        (true, _) => format!("type_{}", type_cd),
        (false, true) => name.to_string(),
        (false, false) => format!("{} ({})", name, reading),
    }
}

/// One-line summary, or `None` when there is nothing to report.
fn change_summary(classification: &Classification, maps: &ReferenceMaps) -> Option<String> {
    let mut parts = Vec::new();

    if !classification.new_stations.is_empty() {
        parts.push(format!("{} 駅追加", classification.new_stations.len()));
    }
    if !classification.deleted_stations.is_empty() {
        parts.push(format!("{} 駅削除", classification.deleted_stations.len()));
    }

    let mut changes: Vec<(&String, &(i64, i64))> = classification.pass_changes.iter().collect();
    changes.sort_by(|(a, _), (b, _)| station_order(a).cmp(&station_order(b)));
    for (code, (old, new)) in changes {
        parts.push(format!(
            "{}: {} → {}",
            maps.station_name(code),
            pass_symbol(*old),
            pass_symbol(*new)
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Numeric station order, non-numeric codes last.
fn station_order(code: &str) -> (i64, &str) {
    (code.parse().unwrap_or(i64::MAX), code)
}

fn write_station_table(
    out: &mut String,
    classification: &Classification,
    stations: &[&Record],
    maps: &ReferenceMaps,
) {
    let affected = classification.affected_stations();

    let _ = writeln!(out, "<details>");
    let _ = writeln!(out, "<summary>全駅リスト ({}駅)</summary>", stations.len());
    out.push('\n');
    let _ = writeln!(out, "| # | 駅名 | Station | 停車 |");
    let _ = writeln!(out, "|---:|---|---|:---:|");

    for (index, record) in stations.iter().enumerate() {
        let code = record.value("station_cd");
        let station = maps.stations.get(code);
        let name = station
            .and_then(|s| s.get("station_name"))
            .unwrap_or(code);
        let reading = station.map_or("", |s| s.value("station_name_r"));
        let emphasize = affected.contains(code);

        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            index + 1,
            cell(name, emphasize),
            cell(reading, emphasize),
            pass_symbol_raw(record.value("pass"))
        );
    }

    out.push('\n');
    let _ = writeln!(out, "</details>");
}

fn cell(text: &str, emphasize: bool) -> String {
    let escaped = text.replace('|', "\\|");
    if emphasize && !escaped.is_empty() {
        format!("**{}**", escaped)
    } else {
        escaped
    }
}
