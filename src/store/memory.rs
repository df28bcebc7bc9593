use super::{TransactionRow, TransactionStore};
use crate::core::error::StorageError;
use std::sync::RwLock;

/// Ephemeral store; rows live only as long as the value.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<TransactionRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::Io(std::io::Error::other("memory store lock poisoned"))
    }
}

impl TransactionStore for MemoryStore {
    fn initialize(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn append(
        &self,
        amount: f64,
        category: &str,
        iso_timestamp: &str,
        description: &str,
    ) -> Result<(), StorageError> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        let id = rows.len() as i64 + 1;
        rows.push(TransactionRow {
            id,
            amount,
            category: category.to_string(),
            date: iso_timestamp.to_string(),
            description: description.to_string(),
        });
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<TransactionRow>, StorageError> {
        Ok(self.rows.read().map_err(|_| Self::poisoned())?.clone())
    }
}
