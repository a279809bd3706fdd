//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// mismatched or oversized money). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two amounts that must share a currency do not.
    #[error("currencies don't match: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// An amount does not fit the decimal range.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn currency_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::AmountOutOfRange(msg.into())
    }
}
