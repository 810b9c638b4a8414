//! Markdown report rendering.
//!
//! - `format`: one section per classified group
//! - `document`: marker, heading, tallies, legend and size-bounded assembly

mod document;
mod format;

#[cfg(test)]
mod tests;

// Re-export public API
pub use document::{
    DocumentParts, REPORT_MARKER, TRUNCATION_NOTICE, Tally, assemble, legend,
};
pub use format::{format_group, line_names_for_group};
