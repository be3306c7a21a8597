//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::BudgetValidationError;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The external tabular store could not be read or written
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A second budget was requested for a category that already has one
    #[error("A budget already exists for category '{category}'")]
    DuplicateCategory { category: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Precondition violations on typed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A row was read but could not be decoded into a record
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error for a category whose spending total no
    /// longer fits the supported money range
    pub fn total_out_of_range(category: &str) -> Self {
        Self::Validation(format!(
            "Total spent in {} exceeds the largest supported amount",
            category
        ))
    }

    /// Create a duplicate-budget error
    pub fn duplicate_category(category: impl Into<String>) -> Self {
        Self::DuplicateCategory {
            category: category.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the store could not be reached
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<BudgetValidationError> for LedgerError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
