pub mod common;
pub mod draft;
pub mod transaction;

pub use common::Displayable;
pub use draft::{DraftAmount, TransactionDraft, ValidatedFields};
pub use transaction::{Transaction, TransactionId, TransactionKind};
