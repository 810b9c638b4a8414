//! Assembly of the final, size-bounded report document.

use crate::classify::Classification;
use crate::stop_condition::StopCondition;

/// Hidden marker that lets the caller find and replace a previous report.
pub const REPORT_MARKER: &str = "<!-- sst-diff-report -->";

const TITLE: &str = "## 🚃 停車パターン変更レポート";

/// Appended in place of the sections that did not fit.
pub const TRUNCATION_NOTICE: &str =
    "\n> ⚠️ レポートが長すぎるため、以降のグループは省略されました。\n";

/// Rendered groups per category; each group counts exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub new: usize,
    pub changed: usize,
    pub deleted: usize,
}

impl Tally {
    pub fn add(&mut self, classification: &Classification) {
        if classification.is_new {
            self.new += 1;
        } else if classification.is_deleted {
            self.deleted += 1;
        } else {
            self.changed += 1;
        }
    }

    /// `**N** 件の新しい停車パターン | ...`, omitting zero counts.
    pub fn summary_line(&self) -> String {
        [
            (self.new, "新しい"),
            (self.changed, "変更された"),
            (self.deleted, "削除された"),
        ]
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("**{}** 件の{}停車パターン", count, label))
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

/// Inputs to [`assemble`].
#[derive(Debug, Clone)]
pub struct DocumentParts<'a> {
    pub tally: Tally,
    /// Affected groups before the display cap.
    pub total_groups: usize,
    /// The display cap.
    pub max_groups: usize,
    /// Rendered group sections, in report order.
    pub sections: &'a [String],
    /// Upper bound on the document length, in characters.
    pub max_chars: usize,
}

/// Legend line mapping every stop symbol to its meaning.
pub fn legend() -> String {
    let entries: Vec<String> = StopCondition::ALL
        .iter()
        .map(|c| format!("{} {}", c.symbol(), c.label()))
        .collect();
    format!("凡例: {}", entries.join(" / "))
}

/// Build the report.
///
/// Sections are appended while the running length plus the truncation notice
/// stays within `max_chars`; the first section that does not fit is replaced
/// by the notice and nothing follows it.
pub fn assemble(parts: &DocumentParts<'_>) -> String {
    let mut doc = String::new();
    doc.push_str(REPORT_MARKER);
    doc.push('\n');
    doc.push_str(TITLE);
    doc.push_str("\n\n");

    let summary = parts.tally.summary_line();
    if !summary.is_empty() {
        doc.push_str(&format!("{}\n\n", summary));
    }
    doc.push_str(&legend());
    doc.push('\n');

    if parts.total_groups > parts.max_groups {
        doc.push_str(&format!(
            "\n> ⚠️ 変更グループが多いため、{} 件中 {} 件のみ表示しています。\n",
            parts.total_groups, parts.max_groups
        ));
    }

    let notice_len = TRUNCATION_NOTICE.chars().count();
    let mut length = doc.chars().count();

    for section in parts.sections {
        let block = format!("\n{}", section);
        let block_len = block.chars().count();
        if length + block_len + notice_len > parts.max_chars {
            doc.push_str(TRUNCATION_NOTICE);
            break;
        }
        doc.push_str(&block);
        length += block_len;
    }

    doc
}
