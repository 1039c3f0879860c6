//! Derived totals for the dashboard header.

use serde::Serialize;
use tracing::trace;

use crate::domain::{Transaction, TransactionKind};
use crate::ledger::{LedgerStore, SnapshotId};

/// Income, expense, and net balance for one ledger snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums amounts per kind in a single pass over `transactions`.
    pub fn compute(transactions: &[Transaction]) -> LedgerTotals {
        let (income, expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| match txn.kind {
                    TransactionKind::Income => (income + txn.amount, expenses),
                    TransactionKind::Expense => (income, expenses + txn.amount),
                });
        LedgerTotals {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Memoizes [`SummaryService::compute`] for a single unchanged store snapshot.
#[derive(Debug, Default)]
pub struct MetricsCache {
    cached: Option<(SnapshotId, LedgerTotals)>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns totals for the store's current snapshot, recomputing only after a mutation.
    pub fn totals(&mut self, store: &LedgerStore) -> LedgerTotals {
        let snapshot = store.snapshot_id();
        if let Some((cached_snapshot, totals)) = self.cached {
            if cached_snapshot == snapshot {
                trace!(revision = snapshot.revision, "totals cache hit");
                return totals;
            }
        }
        trace!(revision = snapshot.revision, "recomputing totals");
        let totals = SummaryService::compute(store.list());
        self.cached = Some((snapshot, totals));
        totals
    }

    /// Snapshot the cached totals belong to, if any.
    pub fn cached_snapshot(&self) -> Option<SnapshotId> {
        self.cached.map(|(snapshot, _)| snapshot)
    }
}
