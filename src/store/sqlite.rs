use super::{TransactionRow, TransactionStore};
use crate::core::error::StorageError;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tracing::debug;

const CREATE_TRANSACTIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount REAL,
        category TEXT,
        date TEXT,
        description TEXT
    )";

/// SQLite-backed store holding one connection for the process lifetime.
/// The connection is released when the store is dropped.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file and its parent directory.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened transaction store at {}", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl TransactionStore for SqliteStore {
    fn initialize(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(CREATE_TRANSACTIONS_TABLE)?;
        Ok(())
    }

    fn append(
        &self,
        amount: f64,
        category: &str,
        iso_timestamp: &str,
        description: &str,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO transactions (amount, category, date, description) VALUES (?1, ?2, ?3, ?4)",
            params![amount, category, iso_timestamp, description],
        )?;
        debug!(id = self.conn.last_insert_rowid(), "Inserted transaction row");
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<TransactionRow>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, amount, category, date, description FROM transactions ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok(TransactionRow {
                id: r.get(0)?,
                amount: r.get(1)?,
                category: r.get::<_, Option<String>>(2)?.unwrap_or_default(),
                date: r.get::<_, Option<String>>(3)?.unwrap_or_default(),
                description: r.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?;

        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store.initialize().unwrap();
        assert!(store.scan_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_scan_in_insertion_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store
            .append(1000.0, "Salary", "2024-04-01T09:00:00.000000", "April Salary")
            .unwrap();
        store
            .append(-150.0, "Groceries", "2024-04-02T18:30:00.000000", "Weekly groceries")
            .unwrap();

        let rows = store.scan_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, 1000.0);
        assert_eq!(rows[0].category, "Salary");
        assert_eq!(rows[1].amount, -150.0);
        assert_eq!(rows[1].description, "Weekly groceries");
        assert!(rows[0].id < rows[1].id);
    }

    #[test]
    fn test_rows_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("transactions.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            store.initialize().unwrap();
            store
                .append(5.5, "Coffee", "2024-04-03T07:45:00.000000", "Flat white")
                .unwrap();
            assert_eq!(store.path(), Some(db_path.as_path()));
        }

        let store = SqliteStore::open(&db_path).unwrap();
        store.initialize().unwrap();
        let rows = store.scan_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-04-03T07:45:00.000000");
    }

    #[test]
    fn test_corrupt_file_fails_with_storage_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("transactions.db");
        std::fs::write(&db_path, "not an sqlite database\n".repeat(256)).unwrap();

        let result = SqliteStore::open(&db_path).and_then(|s| s.initialize());
        assert!(result.is_err());
    }
}
