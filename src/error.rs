//! Error types for Homesense
//!
//! Missing sensor values are never errors: they are handled by imputation
//! and omission rules. Errors are reserved for calls that cannot produce a
//! meaningful result.

use thiserror::Error;

/// Result type alias for Homesense operations
pub type Result<T> = std::result::Result<T, HomesenseError>;

/// Main error type for Homesense operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HomesenseError {
    /// An argument is outside its valid domain (zero sizes, bad fractions,
    /// invalid configuration).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input does not satisfy what the operation requires (empty or
    /// inconsistent cleaned records).
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl HomesenseError {
    /// Build an [`HomesenseError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        HomesenseError::InvalidArgument(msg.into())
    }

    /// Build an [`HomesenseError::PreconditionFailed`].
    pub fn precondition(msg: impl Into<String>) -> Self {
        HomesenseError::PreconditionFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HomesenseError::invalid_argument("num_days must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument: num_days must be at least 1"
        );

        let err = HomesenseError::precondition("no cleaned records");
        assert!(err.to_string().contains("no cleaned records"));
    }

    #[test]
    fn test_error_kinds_differ() {
        assert_ne!(
            HomesenseError::invalid_argument("x"),
            HomesenseError::precondition("x")
        );
    }
}
