//! Pairs one ledger store with its memoized totals.

use tracing::info;

use crate::config::LedgerConfig;
use crate::core::services::{LedgerTotals, MetricsCache};
use crate::domain::{Transaction, TransactionDraft, TransactionId};
use crate::errors::Result;
use crate::ledger::{sample_transactions, LedgerStore};

/// Entry point for a presentation layer: mutate the ledger, then read fresh totals.
#[derive(Debug, Default)]
pub struct LedgerSession {
    store: LedgerStore,
    metrics: MetricsCache,
}

impl LedgerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let mut session = Self::new();
        session.seed(sample_transactions());
        session
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        let mut session = Self {
            store: LedgerStore::with_first_id(config.first_id),
            metrics: MetricsCache::new(),
        };
        if config.seed_sample_data {
            session.seed(sample_transactions());
        }
        info!(
            entries = session.store.len(),
            first_id = config.first_id,
            "ledger session started"
        );
        session
    }

    pub fn seed(&mut self, initial: Vec<Transaction>) {
        self.store.seed(initial);
    }

    pub fn add(&mut self, draft: &TransactionDraft) -> Result<Transaction> {
        self.store.add(draft)
    }

    pub fn update(&mut self, id: TransactionId, draft: &TransactionDraft) -> Result<Transaction> {
        self.store.update(id, draft)
    }

    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        self.store.delete(id)
    }

    pub fn list(&self) -> &[Transaction] {
        self.store.list()
    }

    /// Totals for the current ledger; cached until the next mutation.
    pub fn totals(&mut self) -> LedgerTotals {
        self.metrics.totals(&self.store)
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }
}
