//! Completion signal for the invoking environment.
//!
//! Writes `has_changes=true|false` to a GitHub Actions style output file, or
//! to stdout when no file is configured.

use crate::error::{ReportError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Name of the output the caller reads.
pub const HAS_CHANGES: &str = "has_changes";

/// Append the `has_changes` output to `sink`, or print it when `sink` is `None`.
pub fn write_signal(sink: Option<&Path>, has_changes: bool) -> Result<()> {
    let line = format!("{}={}\n", HAS_CHANGES, has_changes);

    let Some(path) = sink else {
        print!("{}", line);
        return Ok(());
    };

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()))
        .map_err(|e| {
            ReportError::DataError(format!(
                "failed to write {} to '{}': {}",
                HAS_CHANGES,
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_to_existing_outputs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "other=1\n").unwrap();

        write_signal(Some(&path), true).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "other=1\nhas_changes=true\n"
        );
    }

    #[test]
    fn test_creates_missing_sink() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");

        write_signal(Some(&path), false).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "has_changes=false\n");
    }

    #[test]
    fn test_unwritable_sink_is_data_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out");

        let err = write_signal(Some(&path), true).unwrap_err();

        assert!(matches!(err, ReportError::DataError(_)));
    }
}
