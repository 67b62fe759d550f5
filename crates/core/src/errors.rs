//! Core error types for the shipping rate pipeline.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whichever layer implements the repository traits.
//!
//! Recoverable, cart-level problems are *not* errors here: they travel as
//! [`RateError`](crate::rates::RateError) entries inside the rate list. An
//! [`Error`] always aborts the request.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for shipping rate resolution.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    /// A configuration the pipeline recognizes but cannot honor yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    /// Stable, machine-checkable kind of this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Database(_) => "database",
            Error::InvalidConfigValue(_) => "invalid-config",
            Error::NotImplemented(_) => "not-implemented",
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented(_))
    }
}

/// Database-agnostic error type for storage operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a connection to the backing store.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}
