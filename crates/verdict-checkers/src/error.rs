//! Error types for checker lookup and configuration.
//!
//! Check outcomes never surface here: a failed or misused check is a
//! [`CheckResult`](verdict_types::CheckResult). These errors cover the
//! registry around the checkers.

use thiserror::Error;

/// Errors raised by the checker registry.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// No checker is registered under the requested name.
    #[error("unknown checker: {0}")]
    UnknownChecker(String),

    /// Strict arity is enabled and the argument count is wrong.
    #[error("checker {checker} expects {expected} arguments, got {found}")]
    ArityMismatch {
        checker: String,
        expected: usize,
        found: usize,
    },

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for registry operations.
pub type CheckerResult<T> = Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CheckerError::UnknownChecker("Nope".into());
        assert_eq!(err.to_string(), "unknown checker: Nope");

        let err = CheckerError::ArityMismatch {
            checker: "Contains".into(),
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "checker Contains expects 2 arguments, got 1");

        let err = CheckerError::Configuration("bad json".into());
        assert_eq!(err.to_string(), "configuration error: bad json");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CheckerError>();
    }
}
