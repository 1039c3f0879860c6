//! Thread-safe handle that serializes every ledger operation behind one lock.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::error;

use crate::core::services::LedgerTotals;
use crate::core::session::LedgerSession;
use crate::domain::{Transaction, TransactionDraft, TransactionId};
use crate::errors::{LedgerError, Result};

/// Clonable handle; clones share the same session.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<LedgerSession>>,
}

impl SharedLedger {
    pub fn new(session: LedgerSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn seed(&self, initial: Vec<Transaction>) -> Result<()> {
        self.lock()?.seed(initial);
        Ok(())
    }

    pub fn add(&self, draft: &TransactionDraft) -> Result<Transaction> {
        self.lock()?.add(draft)
    }

    pub fn update(&self, id: TransactionId, draft: &TransactionDraft) -> Result<Transaction> {
        self.lock()?.update(id, draft)
    }

    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>> {
        Ok(self.lock()?.delete(id))
    }

    /// Copy of the ledger as of the most recently completed mutation.
    pub fn list(&self) -> Result<Vec<Transaction>> {
        Ok(self.lock()?.list().to_vec())
    }

    pub fn totals(&self) -> Result<LedgerTotals> {
        Ok(self.lock()?.totals())
    }

    /// Runs `f` with exclusive access, for reads that must see one consistent state.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut LedgerSession) -> T) -> Result<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerSession>> {
        self.inner.lock().map_err(|_| {
            error!("ledger lock poisoned");
            LedgerError::Poisoned
        })
    }
}
