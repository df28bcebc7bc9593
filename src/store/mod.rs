//! Durable, row-oriented transaction storage.

pub mod memory;
pub mod sqlite;

use crate::core::error::StorageError;
use crate::core::transaction::{Transaction, parse_iso_timestamp};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// One persisted transaction. The surrogate id is assigned by the store
/// and never read back into the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl TransactionRow {
    pub fn into_transaction(self) -> Result<Transaction, StorageError> {
        let timestamp =
            parse_iso_timestamp(&self.date).map_err(|e| StorageError::CorruptRow {
                row: self.id,
                reason: format!("invalid date '{}': {e}", self.date),
            })?;
        Ok(Transaction::new(
            self.amount,
            self.category,
            timestamp,
            self.description,
        ))
    }
}

/// Append-only storage. There is no update, delete, or grouping of appends.
pub trait TransactionStore {
    /// Idempotently creates the schema.
    fn initialize(&self) -> Result<(), StorageError>;

    fn append(
        &self,
        amount: f64,
        category: &str,
        iso_timestamp: &str,
        description: &str,
    ) -> Result<(), StorageError>;

    /// Every row, in insertion order.
    fn scan_all(&self) -> Result<Vec<TransactionRow>, StorageError>;
}
