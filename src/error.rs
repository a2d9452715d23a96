//! Shared error vocabulary for the pattern modules.
//!
//! Every operation either succeeds or fails with one of these variants; a
//! failing call leaves the objects involved unchanged.

use thiserror::Error;

/// Failure modes shared across the pattern modules.
#[derive(Error, Debug, PartialEq)]
pub enum PatternError {
    /// A caller-supplied value could not be resolved, for example an
    /// unrecognized strategy name coming from a front-end selection.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation reached a holder with no active behavior unit. The
    /// constructors in this crate require an initial unit, so the variant
    /// is reserved for callers that manage their units dynamically.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, PatternError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PatternError::InvalidArgument("no strategy named 'export'".to_string());
        assert_eq!(
            format!("{err}"),
            "invalid argument: no strategy named 'export'"
        );
    }

    #[test]
    fn test_illegal_state_message() {
        let err = PatternError::IllegalState("holder has no active strategy");
        assert_eq!(format!("{err}"), "illegal state: holder has no active strategy");
    }

    #[test]
    fn test_variants_compare_by_content() {
        assert_eq!(
            PatternError::InvalidArgument("x".to_string()),
            PatternError::InvalidArgument("x".to_string())
        );
        assert_ne!(
            PatternError::IllegalState("a"),
            PatternError::IllegalState("b")
        );
    }
}
