//! Unified error handling for Farmsight.
//!
//! This module provides a common error type used across all crates,
//! reducing boilerplate and making error handling consistent.

/// Unified error type for Farmsight.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Not found errors.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A status transition that the alert state machine forbids.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// An unrecognized snooze duration token.
    #[error("Invalid snooze duration: {0}")]
    InvalidDuration(String),

    /// A malformed notification preferences payload.
    #[error("Invalid preferences: {0}")]
    InvalidPreference(String),

    /// Validation errors.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience macros for creating errors.
#[macro_export]
macro_rules! not_found_err {
    ($msg:expr) => {
        $crate::error::Error::NotFound($msg.into())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::NotFound(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_err {
    ($msg:expr) => {
        $crate::error::Error::Validation($msg.into())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::Validation(format!($fmt, $($arg)*))
    };
}

// Error conversion helpers
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidPreference(e.to_string())
    }
}

impl From<uuid::Error> for Error {
    fn from(e: uuid::Error) -> Self {
        Error::Validation(e.to_string())
    }
}

// Convenience constructors for common errors
impl Error {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    pub fn invalid_preference(msg: impl Into<String>) -> Self {
        Self::InvalidPreference(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
