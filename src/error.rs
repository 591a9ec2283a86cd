//! Custom error types for my-finances
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for my-finances operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required form field was missing or blank
    #[error("Validation error: {0}")]
    Validation(String),

    /// The amount field could not be parsed into a currency value
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] MoneyParseError),

    /// The date field was not a calendar date
    #[error("Invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short id matched more than one transaction
    #[error("Ambiguous transaction id '{identifier}' matches {matches} transactions")]
    AmbiguousId { identifier: String, matches: usize },

    /// The stored ledger blob could not be read back
    #[error("Stored ledger is corrupt: {0}")]
    CorruptState(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (missing fields or unparseable input)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount(_) | Self::InvalidDate(_)
        )
    }

    /// Check if this error came from a corrupt stored ledger
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, Self::CorruptState(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for my-finances operations
pub type FinanceResult<T> = Result<T, FinanceError>;
