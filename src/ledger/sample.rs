//! Demonstration entries a fresh dashboard starts with.

use chrono::NaiveDate;

use crate::domain::{Transaction, TransactionKind};

/// Returns five sample entries covering both kinds and several categories.
pub fn sample_transactions() -> Vec<Transaction> {
    [
        (1, "Monthly Salary", 5000.0, TransactionKind::Income, "Salary", 1),
        (2, "Groceries", 150.0, TransactionKind::Expense, "Food", 3),
        (3, "Internet Bill", 60.0, TransactionKind::Expense, "Bills", 5),
        (4, "Freelance Project", 750.0, TransactionKind::Income, "Freelance", 7),
        (5, "Dinner Out", 45.0, TransactionKind::Expense, "Food", 8),
    ]
    .into_iter()
    .filter_map(|(id, description, amount, kind, category, day)| {
        let date = NaiveDate::from_ymd_opt(2023, 10, day)?;
        Some(Transaction::new(id, description, amount, kind, category, date))
    })
    .collect()
}
