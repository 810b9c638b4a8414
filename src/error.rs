//! Error types for the sst-report CLI.
//!
//! Uses thiserror for derive macros; every variant maps to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sst-report operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Missing required input or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// The dataset failed referential checks.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The diff source failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// An input table could not be read or parsed, or the report could not be written.
    #[error("Data error: {0}")]
    DataError(String),

    /// A classifier invariant did not hold.
    #[error("Internal consistency error: {0}")]
    Internal(String),
}

impl ReportError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::UserError(_) => exit_codes::USER_ERROR,
            ReportError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            ReportError::GitError(_) => exit_codes::GIT_FAILURE,
            ReportError::DataError(_) => exit_codes::DATA_FAILURE,
            ReportError::Internal(_) => exit_codes::INTERNAL_FAILURE,
        }
    }
}

/// Result type alias for sst-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
