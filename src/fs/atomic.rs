//! Atomic file writes.
//!
//! Content goes to `.{filename}.tmp` in the target's directory, is synced to
//! disk, then renamed over the target. `std::fs::rename` replaces an existing
//! target on both POSIX and Windows.

use crate::error::{ReportError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(ReportError::DataError)` - On create, write, sync or rename failure
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ReportError::DataError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ReportError::DataError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ReportError::DataError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ReportError::DataError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ReportError::DataError(format!("failed to write temporary file: {}", e))
        })
}
