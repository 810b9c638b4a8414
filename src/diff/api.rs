//! Diff source backed by the git executable.

use crate::error::{ReportError, Result};
use crate::git::run_git;
use std::path::Path;

/// Get the unified diff of one file between the merge base of `base_ref` and
/// `HEAD`, and `HEAD` itself.
///
/// Runs `git diff --no-color --no-ext-diff {base_ref}...HEAD -- {path}`, so
/// commits made on the base branch after the fork never show up.
///
/// # Arguments
///
/// * `cwd` - The repository directory
/// * `base_ref` - Branch name, tag or commit to compare against
/// * `path` - Repository-relative file path
///
/// # Returns
///
/// * `Ok(String)` - Diff text; empty when the file is unchanged
/// * `Err(ReportError::GitError)` - Git failed; the message names the path
pub fn file_diff<P: AsRef<Path>>(cwd: P, base_ref: &str, path: &str) -> Result<String> {
    let range = format!("{}...HEAD", base_ref);
    let output = run_git(
        &cwd,
        &["diff", "--no-color", "--no-ext-diff", &range, "--", path],
    )
    .map_err(|e| ReportError::GitError(format!("failed to diff '{}': {}", path, e)))?;

    Ok(output.stdout)
}
