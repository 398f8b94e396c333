//! Ledger error model.

use std::path::PathBuf;

use thiserror::Error;

use crate::severity::Severity;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is also written to the transaction log at the point it is
/// raised, so callers that ignore the result still leave an audit trail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Quantity (or resulting quantity) is outside the accepted range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A removal asked for more than is in stock.
    #[error("insufficient stock to remove {requested} of {item} (current stock: {available})")]
    InsufficientStock {
        item: String,
        requested: u64,
        available: u64,
    },

    /// A removal targeted an item that has no entry.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// The data file does not exist.
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The data file could not be decoded.
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// Reading or writing the data file failed.
    #[error("io failure: {0}")]
    Io(String),
}

impl LedgerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn insufficient_stock(item: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile(path.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedData(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Severity this error is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            LedgerError::InsufficientStock { .. }
            | LedgerError::ItemNotFound(_)
            | LedgerError::MissingFile(_) => Severity::Warning,
            LedgerError::InvalidInput(_)
            | LedgerError::MalformedData(_)
            | LedgerError::Io(_) => Severity::Error,
        }
    }
}
