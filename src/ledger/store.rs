use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Displayable, Transaction, TransactionDraft, TransactionId};
use crate::errors::{LedgerError, Result};

const DEFAULT_FIRST_ID: u64 = 1;

/// Identifies one unchanged state of one store instance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct SnapshotId {
    pub store: Uuid,
    pub revision: u64,
}

/// Canonical, newest-first collection of ledger entries.
#[derive(Debug)]
pub struct LedgerStore {
    instance: Uuid,
    revision: u64,
    // `None` once every `u64` id has been handed out.
    next_id: Option<u64>,
    transactions: Vec<Transaction>,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::with_first_id(DEFAULT_FIRST_ID)
    }

    /// Creates an empty store whose first generated id is `first_id`.
    pub fn with_first_id(first_id: u64) -> Self {
        Self {
            instance: Uuid::new_v4(),
            revision: 0,
            next_id: Some(first_id),
            transactions: Vec::new(),
        }
    }

    pub fn seeded(initial: Vec<Transaction>) -> Self {
        let mut store = Self::new();
        store.seed(initial);
        store
    }

    /// Replaces the contents with trusted initial data.
    ///
    /// Seed data is not revalidated. Id generation resumes past the largest
    /// seeded id so later additions never collide with it. Seeding an id of
    /// `u64::MAX` exhausts id generation.
    pub fn seed(&mut self, initial: Vec<Transaction>) {
        if let Some(max) = initial.iter().map(|txn| txn.id.0).max() {
            self.next_id = match (self.next_id, max.checked_add(1)) {
                (Some(next), Some(after_seed)) => Some(next.max(after_seed)),
                _ => None,
            };
        }
        debug!(count = initial.len(), "seeding ledger");
        self.transactions = initial;
        self.touch();
    }

    /// Validates `draft`, assigns a fresh id, and prepends the new entry.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<Transaction> {
        let fields = draft.validate().inspect_err(|err| {
            warn!(error = %err, "rejected new transaction");
        })?;
        let id = self.allocate_id()?;
        let txn = fields.into_transaction(id);
        debug!(id = %txn.id, entry = %txn.display_label(), "added transaction");
        self.transactions.insert(0, txn.clone());
        self.touch();
        Ok(txn)
    }

    /// Replaces every field but the id of the entry matching `id`, in place.
    pub fn update(&mut self, id: TransactionId, draft: &TransactionDraft) -> Result<Transaction> {
        let fields = draft.validate().inspect_err(|err| {
            warn!(%id, error = %err, "rejected transaction update");
        })?;
        let Some(txn) = self.transactions.iter_mut().find(|txn| txn.id == id) else {
            warn!(%id, "update target missing");
            return Err(LedgerError::NotFound(id));
        };
        fields.apply_to(txn);
        let updated = txn.clone();
        debug!(%id, entry = %updated.display_label(), "updated transaction");
        self.touch();
        Ok(updated)
    }

    /// Removes the entry matching `id`. Missing ids are a no-op.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let Some(index) = self.transactions.iter().position(|txn| txn.id == id) else {
            debug!(%id, "delete ignored, transaction already absent");
            return None;
        };
        let removed = self.transactions.remove(index);
        debug!(%id, "deleted transaction");
        self.touch();
        Some(removed)
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn snapshot_id(&self) -> SnapshotId {
        SnapshotId {
            store: self.instance,
            revision: self.revision,
        }
    }

    fn allocate_id(&mut self) -> Result<TransactionId> {
        let Some(id) = self.next_id else {
            warn!("transaction ids exhausted");
            return Err(LedgerError::IdsExhausted);
        };
        self.next_id = id.checked_add(1);
        Ok(TransactionId(id))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use crate::errors::DraftField;
    use chrono::NaiveDate;

    fn draft(description: &str) -> TransactionDraft {
        TransactionDraft::default()
            .description(description)
            .amount("10")
            .kind("expense")
            .category("Misc")
            .date("2023-10-10")
    }

    fn entry(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            id,
            format!("entry {id}"),
            amount,
            kind,
            "Seed",
            NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        )
    }

    #[test]
    fn add_prepends_new_entries() {
        let mut store = LedgerStore::new();
        let a = store.add(&draft("A")).unwrap();
        let b = store.add(&draft("B")).unwrap();
        let c = store.add(&draft("C")).unwrap();
        let ids: Vec<_> = store.list().iter().map(|txn| txn.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[test]
    fn ids_continue_past_seeded_entries() {
        let mut store = LedgerStore::seeded(vec![
            entry(4, 1.0, TransactionKind::Income),
            entry(9, 1.0, TransactionKind::Expense),
        ]);
        let added = store.add(&draft("after seed")).unwrap();
        assert_eq!(added.id, TransactionId(10));
    }

    #[test]
    fn first_id_is_configurable() {
        let mut store = LedgerStore::with_first_id(500);
        assert_eq!(store.add(&draft("x")).unwrap().id, TransactionId(500));
        assert_eq!(store.add(&draft("y")).unwrap().id, TransactionId(501));
    }

    #[test]
    fn reseeding_never_reissues_ids() {
        let mut store = LedgerStore::new();
        let first = store.add(&draft("first")).unwrap();
        store.seed(Vec::new());
        let second = store.add(&draft("second")).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn seeding_the_largest_id_exhausts_generation() {
        let mut store = LedgerStore::seeded(vec![entry(u64::MAX, 1.0, TransactionKind::Income)]);
        let before = store.snapshot_id();
        let err = store.add(&draft("one too many")).unwrap_err();
        assert!(matches!(err, LedgerError::IdsExhausted), "unexpected error: {err:?}");
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot_id(), before);
    }

    #[test]
    fn last_id_is_issued_once() {
        let mut store = LedgerStore::with_first_id(u64::MAX);
        let last = store.add(&draft("last")).unwrap();
        assert_eq!(last.id, TransactionId(u64::MAX));
        assert!(matches!(store.add(&draft("after last")), Err(LedgerError::IdsExhausted)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reseeding_keeps_exhausted_generation() {
        let mut store = LedgerStore::seeded(vec![entry(u64::MAX, 1.0, TransactionKind::Income)]);
        store.seed(vec![entry(3, 1.0, TransactionKind::Expense)]);
        assert!(matches!(store.add(&draft("x")), Err(LedgerError::IdsExhausted)));
    }

    #[test]
    fn update_keeps_position_and_id() {
        let mut store = LedgerStore::seeded(vec![
            entry(1, 1.0, TransactionKind::Income),
            entry(2, 2.0, TransactionKind::Expense),
            entry(3, 3.0, TransactionKind::Expense),
        ]);
        let updated = store
            .update(TransactionId(2), &draft("Changed").kind("income").amount(99.0))
            .unwrap();
        assert_eq!(updated.id, TransactionId(2));
        assert_eq!(store.list()[1], updated);
        assert_eq!(store.list()[1].kind, TransactionKind::Income);
        assert_eq!(store.list()[1].amount, 99.0);
        assert_eq!(store.list()[0].id, TransactionId(1));
        assert_eq!(store.list()[2].id, TransactionId(3));
    }

    #[test]
    fn update_missing_id_fails_without_mutation() {
        let mut store = LedgerStore::seeded(vec![entry(1, 1.0, TransactionKind::Income)]);
        let before = store.snapshot_id();
        let err = store.update(TransactionId(77), &draft("ghost")).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(TransactionId(77))));
        assert_eq!(store.snapshot_id(), before);
        assert_eq!(store.list()[0].description, "entry 1");
    }

    #[test]
    fn invalid_draft_wins_over_missing_target() {
        let mut store = LedgerStore::seeded(vec![entry(1, 1.0, TransactionKind::Income)]);
        let before = store.snapshot_id();
        let err = store
            .update(TransactionId(404), &draft("ghost").amount("-1"))
            .unwrap_err();
        assert_eq!(err.field(), Some(DraftField::Amount));
        assert_eq!(store.snapshot_id(), before);
        assert_eq!(store.list()[0], entry(1, 1.0, TransactionKind::Income));
    }

    #[test]
    fn invalid_update_leaves_entry_untouched() {
        let mut store = LedgerStore::seeded(vec![entry(1, 1.0, TransactionKind::Income)]);
        let err = store
            .update(TransactionId(1), &draft("bad").amount("-3"))
            .unwrap_err();
        assert_eq!(err.field(), Some(DraftField::Amount));
        assert_eq!(store.list()[0], entry(1, 1.0, TransactionKind::Income));
    }

    #[test]
    fn rejected_add_does_not_consume_state() {
        let mut store = LedgerStore::new();
        let before = store.snapshot_id();
        assert!(store.add(&draft("")).is_err());
        assert!(store.is_empty());
        assert_eq!(store.snapshot_id(), before);
        assert_eq!(store.add(&draft("ok")).unwrap().id, TransactionId(1));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = LedgerStore::seeded(vec![
            entry(1, 1.0, TransactionKind::Income),
            entry(2, 2.0, TransactionKind::Expense),
            entry(3, 3.0, TransactionKind::Expense),
        ]);
        let removed = store.delete(TransactionId(2)).unwrap();
        assert_eq!(removed.id, TransactionId(2));
        let after_first = store.snapshot_id();
        assert!(store.delete(TransactionId(2)).is_none());
        assert_eq!(store.snapshot_id(), after_first);
        let ids: Vec<_> = store.list().iter().map(|txn| txn.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn snapshot_changes_on_every_mutation() {
        let mut store = LedgerStore::new();
        let empty = store.snapshot_id();
        let txn = store.add(&draft("a")).unwrap();
        let added = store.snapshot_id();
        assert_ne!(empty, added);
        store.update(txn.id, &draft("b")).unwrap();
        assert_ne!(store.snapshot_id(), added);
        assert_eq!(store.snapshot_id().store, empty.store);
    }

    #[test]
    fn separate_stores_have_distinct_snapshots() {
        assert_ne!(LedgerStore::new().snapshot_id(), LedgerStore::new().snapshot_id());
    }

    #[test]
    fn get_finds_by_id() {
        let store = LedgerStore::seeded(vec![entry(5, 1.0, TransactionKind::Income)]);
        assert_eq!(store.get(TransactionId(5)).map(|txn| txn.amount), Some(1.0));
        assert!(store.get(TransactionId(6)).is_none());
        assert_eq!(store.len(), 1);
    }
}
