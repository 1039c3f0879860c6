#![doc(test(attr(deny(warnings))))]

//! Ledger Core keeps an in-memory list of income and expense entries and
//! derives the income, expense, and balance totals a finance dashboard shows.
//!
//! ```
//! use ledger_core::{LedgerSession, TransactionDraft};
//!
//! let mut session = LedgerSession::with_sample_data();
//! let draft = TransactionDraft::default()
//!     .description("Coffee")
//!     .amount("4.50")
//!     .kind("expense")
//!     .category("Food")
//!     .date("2023-10-09");
//! session.add(&draft).unwrap();
//! assert_eq!(session.totals().expenses, 259.5);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use crate::config::LedgerConfig;
pub use crate::core::{LedgerSession, LedgerTotals, MetricsCache, SharedLedger, SummaryService};
pub use crate::domain::{DraftAmount, Transaction, TransactionDraft, TransactionId, TransactionKind};
pub use crate::errors::{DraftField, LedgerError, Result};
pub use crate::ledger::{LedgerStore, SnapshotId};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with(&LedgerConfig::default());
}

/// Initializes tracing using the log directive from `config`.
///
/// Shares its guard with [`utils::init_tracing`]; whichever runs first wins.
pub fn init_with(config: &LedgerConfig) {
    utils::init_tracing_with(&config.log_directive);
}
