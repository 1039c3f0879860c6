//! Collaborator-facing facades over the ledger store and its derived totals.

pub mod services;
pub mod session;
pub mod shared;

pub use services::{LedgerTotals, MetricsCache, SummaryService};
pub use session::LedgerSession;
pub use shared::SharedLedger;
