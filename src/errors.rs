use std::fmt;

use thiserror::Error;

use crate::domain::transaction::TransactionId;

/// Error type that captures every recoverable ledger failure.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: DraftField, reason: String },
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
    #[error("Transaction ids exhausted")]
    IdsExhausted,
    #[error("Ledger lock poisoned by a panicking holder")]
    Poisoned,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    pub(crate) fn invalid(field: DraftField, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending draft field for validation failures.
    pub fn field(&self) -> Option<DraftField> {
        match self {
            LedgerError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Names the draft field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Description,
    Amount,
    Kind,
    Category,
    Date,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Description => "description",
            DraftField::Amount => "amount",
            DraftField::Kind => "type",
            DraftField::Category => "category",
            DraftField::Date => "date",
        };
        f.write_str(label)
    }
}
