#![allow(dead_code)]

use chrono::NaiveDate;
use ledger_core::{Transaction, TransactionDraft, TransactionKind};

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, day).expect("valid October date")
}

pub fn entry(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
    Transaction::new(id, format!("Entry {id}"), amount, kind, "General", date(1))
}

/// A draft that passes validation; tests override single fields from here.
pub fn valid_draft(description: &str) -> TransactionDraft {
    TransactionDraft::default()
        .description(description)
        .amount("10")
        .kind("expense")
        .category("General")
        .date("2023-10-01")
}
