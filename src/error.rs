//! Custom error types for FinDash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinDash operations
#[derive(Error, Debug)]
pub enum FinDashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input rejected before it reaches the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The store could not be opened, created or read
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// An insert into the store failed
    #[error("Failed to write transaction: {0}")]
    StoreWriteFailed(String),

    /// A stored record could not be converted into a transaction
    #[error(
        "Malformed record{}: {}",
        .row.map(|r| format!(" at row {}", r)).unwrap_or_default(),
        .reason
    )]
    MalformedRecord { row: Option<usize>, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinDashError {
    /// Create a malformed-record error without position information
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            row: None,
            reason: reason.into(),
        }
    }

    /// Attach a row number to a malformed-record error
    pub fn at_row(self, row: usize) -> Self {
        match self {
            Self::MalformedRecord { reason, .. } => Self::MalformedRecord {
                row: Some(row),
                reason,
            },
            other => other,
        }
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinDashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinDashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for FinDashError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

impl From<csv::Error> for FinDashError {
    fn from(err: csv::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

/// Result type alias for FinDash operations
pub type FinDashResult<T> = Result<T, FinDashError>;
