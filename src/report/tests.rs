//! Tests for report rendering.

use super::*;
use crate::classify::{GroupKey, classify};
use crate::reference::ReferenceMaps;
use crate::table::Record;

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

fn sst(station_cd: &str, type_cd: &str, line_group_cd: &str, pass: &str) -> Record {
    record(&[
        ("station_cd", station_cd),
        ("type_cd", type_cd),
        ("line_group_cd", line_group_cd),
        ("pass", pass),
    ])
}

fn maps() -> ReferenceMaps {
    let stations = vec![
        record(&[("station_cd", "100"), ("station_name", "東京"), ("station_name_r", "とうきょう"), ("line_cd", "11302")]),
        record(&[("station_cd", "101"), ("station_name", "神田"), ("station_name_r", "かんだ"), ("line_cd", "11302")]),
        record(&[("station_cd", "200"), ("station_name", "新宿"), ("station_name_r", "しんじゅく"), ("line_cd", "11312")]),
        record(&[("station_cd", "300"), ("station_name", "品川"), ("station_name_r", "しながわ"), ("line_cd", "99999")]),
    ];
    let types = vec![
        record(&[("type_cd", "1"), ("type_name", "快速"), ("type_name_r", "かいそく")]),
        record(&[("type_cd", "2"), ("type_name", "特急"), ("type_name_r", "")]),
    ];
    let lines = vec![
        record(&[("line_cd", "11302"), ("line_name", "山手線")]),
        record(&[("line_cd", "11312"), ("line_name", "中央線")]),
    ];
    ReferenceMaps::build(&stations, &types, &lines)
}

/// A group that did not exist before renders as new with an add count.
#[test]
fn test_new_group_section() {
    let key = GroupKey::new("1", "1");
    let current = vec![sst("100", "1", "1", "0")];
    let classification = classify(&current, &[], &key).unwrap();
    let stations: Vec<&Record> = current.iter().collect();

    let section = format_group(&key, &classification, &stations, &maps());

    assert!(classification.is_new);
    assert!(section.starts_with("### 🆕 快速 (かいそく): 山手線\n"));
    assert!(section.contains("`type_cd=1` `line_group_cd=1`"));
    assert!(section.contains("変更内容: 1 駅追加\n"));
    assert!(section.contains("<summary>全駅リスト (1駅)</summary>"));
    assert!(section.contains("| # | 駅名 | Station | 停車 |"));
    assert!(section.contains("| 1 | **東京** | **とうきょう** | ● |"));
}

/// A pass change renders old and new symbols against the station name.
#[test]
fn test_pass_change_section() {
    let key = GroupKey::new("1", "1");
    let current = vec![sst("100", "1", "1", "0"), sst("200", "1", "1", "0")];
    let added = vec![sst("200", "1", "1", "0")];
    let removed = vec![sst("200", "1", "1", "1")];
    let classification = classify(&added, &removed, &key).unwrap();
    let stations: Vec<&Record> = current.iter().collect();

    let section = format_group(&key, &classification, &stations, &maps());

    assert!(section.starts_with("### ✏️ "));
    assert!(section.contains("新宿: ○ → ●"));
    assert!(!section.contains("駅追加"));
    // Unaffected stations stay plain; affected ones are bold.
    assert!(section.contains("| 1 | 東京 | とうきょう | ● |"));
    assert!(section.contains("| 2 | **新宿** | **しんじゅく** | ● |"));
    // Line names in first-seen order.
    assert!(section.contains(": 山手線 / 中央線\n"));
}

/// A deleted group has no station list and takes line names from removed rows.
#[test]
fn test_deleted_group_section() {
    let key = GroupKey::new("2", "5");
    let removed = vec![sst("200", "2", "5", "0"), sst("101", "2", "5", "1")];
    let classification = classify(&[], &removed, &key).unwrap();

    let section = format_group(&key, &classification, &[], &maps());

    assert!(classification.is_deleted);
    assert!(section.starts_with("### 🗑️ 特急: 中央線 / 山手線\n"));
    assert!(section.contains("2 駅削除"));
    assert!(!section.contains("<details>"));
}

/// Unknown type and station codes fall back to raw codes.
#[test]
fn test_unknown_codes_fall_back() {
    let key = GroupKey::new("42", "1");
    let current = vec![sst("777", "42", "1", "9")];
    let classification = classify(&current, &[], &key).unwrap();
    let stations: Vec<&Record> = current.iter().collect();

    let section = format_group(&key, &classification, &stations, &maps());

    assert!(section.starts_with("### 🆕 type_42: line_group_1\n"));
    assert!(section.contains("| 1 | **777** |  | ? |"));
}

/// A group with nothing to summarize omits the summary line.
#[test]
fn test_empty_summary_omitted() {
    let key = GroupKey::new("1", "1");
    let current = vec![sst("100", "1", "1", "0")];
    let stations: Vec<&Record> = current.iter().collect();
    let classification = crate::classify::Classification::default();

    let section = format_group(&key, &classification, &stations, &maps());

    assert!(!section.contains("変更内容:"));
    assert!(section.contains("| 1 | 東京 | とうきょう | ● |"));
}

/// Rendering twice yields identical text.
#[test]
fn test_format_is_idempotent() {
    let key = GroupKey::new("1", "1");
    let current = vec![sst("100", "1", "3", "0"), sst("101", "1", "1", "2"), sst("200", "1", "1", "4")];
    let added = vec![sst("101", "1", "1", "2"), sst("200", "1", "1", "4"), sst("100", "1", "1", "0")];
    let removed = vec![sst("200", "1", "1", "0"), sst("101", "1", "1", "5"), sst("300", "1", "1", "0")];
    let classification = classify(&added, &removed, &key).unwrap();
    let stations: Vec<&Record> = current.iter().filter(|r| key.contains(r)).collect();
    let maps = maps();

    let first = format_group(&key, &classification, &stations, &maps);
    let second = format_group(&key, &classification, &stations, &maps);

    assert_eq!(first, second);
    // Pass changes are listed by station code.
    assert!(first.contains("変更内容: 1 駅追加 | 1 駅削除 | 神田: ▲ → △ | 新宿: ● → ◇\n"));
}

#[test]
fn test_line_names_skip_unknown_stations() {
    let rows = vec![sst("999", "1", "1", "0"), sst("300", "1", "1", "0"), sst("100", "1", "1", "0"), sst("101", "1", "1", "0")];

    let names = line_names_for_group(&rows, &maps());

    assert_eq!(names, vec!["99999", "山手線"]);
}

#[test]
fn test_tally_summary_omits_zero_counts() {
    let tally = Tally { new: 3, changed: 0, deleted: 1 };
    assert_eq!(
        tally.summary_line(),
        "**3** 件の新しい停車パターン | **1** 件の削除された停車パターン"
    );
    assert_eq!(Tally::default().summary_line(), "");
}

#[test]
fn test_document_starts_with_marker() {
    let sections = vec!["### section one\n".to_string()];
    let doc = assemble(&DocumentParts {
        tally: Tally { new: 1, changed: 2, deleted: 0 },
        total_groups: 1,
        max_groups: 20,
        sections: &sections,
        max_chars: 65_000,
    });

    assert!(doc.starts_with(REPORT_MARKER));
    assert!(doc.contains("**1** 件の新しい停車パターン | **2** 件の変更された停車パターン\n"));
    assert!(doc.contains(&legend()));
    assert!(doc.ends_with("### section one\n"));
    assert!(!doc.contains("件のみ表示"));
}

#[test]
fn test_document_over_cap_notice() {
    let sections = vec!["### s\n".to_string()];
    let doc = assemble(&DocumentParts {
        tally: Tally::default(),
        total_groups: 25,
        max_groups: 20,
        sections: &sections,
        max_chars: 65_000,
    });

    assert!(doc.contains("25 件中 20 件のみ表示"));
}

#[test]
fn test_document_truncates_within_limit() {
    let sections: Vec<String> = (0..50).map(|i| format!("### 区間 {}\n{}\n", i, "駅".repeat(100))).collect();
    let max_chars = 2_000;

    let doc = assemble(&DocumentParts {
        tally: Tally { new: 1, changed: 0, deleted: 0 },
        total_groups: 50,
        max_groups: 50,
        sections: &sections,
        max_chars,
    });

    assert!(doc.chars().count() <= max_chars);
    assert!(doc.ends_with(TRUNCATION_NOTICE));
    assert!(doc.contains("### 区間 0\n"));
    assert!(!doc.contains("### 区間 49\n"));
}

/// A new group counts once however many stations it adds.
#[test]
fn test_tally_counts_groups_not_stations() {
    let key = GroupKey::new("1", "1");
    let current = vec![sst("100", "1", "1", "0"), sst("101", "1", "1", "1"), sst("200", "1", "1", "0")];
    let edited_key = GroupKey::new("2", "5");
    let added = vec![sst("200", "2", "5", "0"), sst("101", "2", "5", "3")];
    let removed = vec![sst("200", "2", "5", "1"), sst("101", "2", "5", "0")];

    let mut tally = Tally::default();
    tally.add(&classify(&current, &[], &key).unwrap());
    tally.add(&classify(&added, &removed, &edited_key).unwrap());

    assert_eq!(tally, Tally { new: 1, changed: 1, deleted: 0 });
    assert_eq!(
        tally.summary_line(),
        "**1** 件の新しい停車パターン | **1** 件の変更された停車パターン"
    );
}

#[test]
fn test_legend_lists_every_symbol() {
    assert_eq!(
        legend(),
        "凡例: ● 停車 / ○ 通過 / △ 一部通過 / ◆ 平日停車 / ◇ 休日停車 / ▲ 一部停車"
    );
}
