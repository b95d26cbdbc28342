//! Domain error model.

use thiserror::Error;

/// Result type used across the generator crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Failure while configuring or generating a data set.
///
/// Every variant is deterministic: the same seed and configuration fail the
/// same way. IO failures are reported by the writer, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A configuration value was rejected before generation started.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Generated rows broke a cross-table or versioning rule.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A number did not fit its zero-padded width, or failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A sequential number range has no numbers left.
    #[error("{kind} range exhausted after {limit}")]
    RangeExhausted { kind: &'static str, limit: u64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn exhausted(kind: &'static str, limit: u64) -> Self {
        Self::RangeExhausted { kind, limit }
    }
}
