//! Domain types representing ledger entries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::{DraftField, LedgerError};

/// Stable identifier assigned to a transaction when it enters the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of a ledger entry. Amounts stay positive; the kind carries the sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::invalid(
                DraftField::Kind,
                format!("expected `income` or `expense`, got `{other}`"),
            )),
        }
    }
}

/// A single income or expense entry held by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId(id),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let sign = if self.is_income() { '+' } else { '-' };
        format!(
            "{} {} ({}) {}{:.2}",
            self.date, self.description, self.category, sign, self.amount
        )
    }
}
