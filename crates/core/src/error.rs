//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, parse
/// failures at the boundary). The presentation formatters themselves degrade
/// to fallback values instead of erroring; this type covers the seams where
/// raw input enters the domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A currency code was not recognized.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// A locale tag was empty or malformed.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    pub fn invalid_locale(msg: impl Into<String>) -> Self {
        Self::InvalidLocale(msg.into())
    }
}
