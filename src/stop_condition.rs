//! Stop behavior codes stored in the SST `pass` column.

/// Glyph shown for a code outside 0–5.
pub const UNKNOWN_SYMBOL: &str = "?";

/// How a train type serves a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stops on every service (0).
    All,
    /// Passes through (1).
    Not,
    /// Some services pass (2).
    Partial,
    /// Stops on weekdays only (3).
    Weekday,
    /// Stops on holidays only (4).
    Holiday,
    /// Some services stop (5).
    PartialStop,
}

impl StopCondition {
    /// Every condition in code order.
    pub const ALL: [StopCondition; 6] = [
        StopCondition::All,
        StopCondition::Not,
        StopCondition::Partial,
        StopCondition::Weekday,
        StopCondition::Holiday,
        StopCondition::PartialStop,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(StopCondition::All),
            1 => Some(StopCondition::Not),
            2 => Some(StopCondition::Partial),
            3 => Some(StopCondition::Weekday),
            4 => Some(StopCondition::Holiday),
            5 => Some(StopCondition::PartialStop),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StopCondition::All => "●",
            StopCondition::Not => "○",
            StopCondition::Partial => "△",
            StopCondition::Weekday => "◆",
            StopCondition::Holiday => "◇",
            StopCondition::PartialStop => "▲",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StopCondition::All => "停車",
            StopCondition::Not => "通過",
            StopCondition::Partial => "一部通過",
            StopCondition::Weekday => "平日停車",
            StopCondition::Holiday => "休日停車",
            StopCondition::PartialStop => "一部停車",
        }
    }
}

/// Glyph for a numeric pass code.
pub fn pass_symbol(code: i64) -> &'static str {
    StopCondition::from_code(code).map_or(UNKNOWN_SYMBOL, StopCondition::symbol)
}

/// Glyph for a raw `pass` column value.
pub fn pass_symbol_raw(raw: &str) -> &'static str {
    raw.trim()
        .parse()
        .map_or(UNKNOWN_SYMBOL, pass_symbol)
}
