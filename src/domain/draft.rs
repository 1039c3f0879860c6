//! Raw form input for a transaction, prior to validation and id assignment.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::{Transaction, TransactionId, TransactionKind};
use crate::errors::{DraftField, LedgerError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Amount as collected from an input widget: either already numeric or raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DraftAmount {
    Number(f64),
    Text(String),
}

impl Default for DraftAmount {
    fn default() -> Self {
        DraftAmount::Text(String::new())
    }
}

impl From<f64> for DraftAmount {
    fn from(value: f64) -> Self {
        DraftAmount::Number(value)
    }
}

impl From<&str> for DraftAmount {
    fn from(value: &str) -> Self {
        DraftAmount::Text(value.to_string())
    }
}

impl From<String> for DraftAmount {
    fn from(value: String) -> Self {
        DraftAmount::Text(value)
    }
}

impl DraftAmount {
    fn parse(&self) -> Result<f64> {
        let value = match self {
            DraftAmount::Number(value) => *value,
            DraftAmount::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(LedgerError::invalid(DraftField::Amount, "is required"));
                }
                trimmed.parse::<f64>().map_err(|_| {
                    LedgerError::invalid(DraftField::Amount, format!("`{trimmed}` is not a number"))
                })?
            }
        };
        if !value.is_finite() {
            return Err(LedgerError::invalid(DraftField::Amount, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(LedgerError::invalid(DraftField::Amount, "must not be negative"));
        }
        // Folds -0.0 into 0.0.
        Ok(value + 0.0)
    }
}

/// User-supplied transaction fields, everything except the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: DraftAmount,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

impl Default for TransactionDraft {
    /// A blank expense dated today, matching a freshly opened entry form.
    fn default() -> Self {
        Self::blank(TransactionKind::default())
    }
}

impl TransactionDraft {
    pub fn blank(kind: TransactionKind) -> Self {
        Self {
            description: String::new(),
            amount: DraftAmount::default(),
            kind: kind.as_str().to_string(),
            category: String::new(),
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount(mut self, amount: impl Into<DraftAmount>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Checks every field and returns the parsed values.
    ///
    /// Fields are checked in form order so the first reported error matches the
    /// first offending input the user sees.
    pub fn validate(&self) -> Result<ValidatedFields> {
        let description = required_text(&self.description, DraftField::Description)?;
        let amount = self.amount.parse()?;
        let kind = self.kind.parse::<TransactionKind>()?;
        let category = required_text(&self.category, DraftField::Category)?;
        let date = parse_date(&self.date)?;
        Ok(ValidatedFields {
            description,
            amount,
            kind,
            category,
            date,
        })
    }
}

impl From<&Transaction> for TransactionDraft {
    /// Pre-fills an edit form from an existing entry.
    fn from(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: DraftAmount::Number(txn.amount),
            kind: txn.kind.as_str().to_string(),
            category: txn.category.clone(),
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Draft fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl ValidatedFields {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date: self.date,
        }
    }

    /// Overwrites every field of `target` except its id.
    pub fn apply_to(self, target: &mut Transaction) {
        target.description = self.description;
        target.amount = self.amount;
        target.kind = self.kind;
        target.category = self.category;
        target.date = self.date;
    }
}

fn required_text(raw: &str, field: DraftField) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid(DraftField::Date, "is required"));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        LedgerError::invalid(
            DraftField::Date,
            format!("`{trimmed}` is not a YYYY-MM-DD date"),
        )
    })
}
