//! In-memory ledger storage and seed data.

pub mod sample;
pub mod store;

pub use sample::sample_transactions;
pub use store::{LedgerStore, SnapshotId};
