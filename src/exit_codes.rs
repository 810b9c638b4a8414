//! Exit code constants for the sst-report CLI.
//!
//! - 0: Success (including "no changes")
//! - 1: User error (missing base reference, bad config)
//! - 2: Validation failure (dangling references in the SST table)
//! - 3: Git operation failure
//! - 4: Data failure (unreadable or malformed CSV input)
//! - 5: Internal consistency failure

/// Successful execution, with or without a report.
pub const SUCCESS: i32 = 0;

/// User error: missing required parameter or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the SST table references unknown stations or types.
pub const VALIDATION_FAILURE: i32 = 2;

/// Git operation failure: the diff source exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// Data failure: an input table could not be read or parsed.
pub const DATA_FAILURE: i32 = 4;

/// Internal consistency failure: a classifier invariant was violated.
pub const INTERNAL_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            VALIDATION_FAILURE,
            GIT_FAILURE,
            DATA_FAILURE,
            INTERNAL_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert!(USER_ERROR > 0);
        assert!(INTERNAL_FAILURE > 0);
    }
}
