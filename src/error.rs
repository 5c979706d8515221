//! Custom error types for SiteKick
//!
//! Defines the error hierarchy for the application using thiserror.

use thiserror::Error;

/// The main error type for SiteKick operations
#[derive(Error, Debug)]
pub enum SiteKickError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A monetary amount or quantity that is negative or not finite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SiteKickError {
    /// Create a "not found" error for projects
    pub fn project_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Project",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for clients
    pub fn client_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for quotes
    pub fn quote_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Quote",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for quote items
    pub fn quote_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Quote item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payments
    pub fn payment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for SiteKickError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SiteKickError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SiteKick operations
pub type SiteKickResult<T> = Result<T, SiteKickError>;
