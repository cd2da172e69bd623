//! SQLite transaction store
//!
//! Keeps transactions in a single `transactions` table. Amounts are stored as
//! integer cents, dates as `YYYY-MM-DD` text.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use super::record::{RawAmount, RawRecord, DATE_FORMAT};
use super::TransactionStore;
use crate::error::{FinDashError, FinDashResult};
use crate::models::{NewTransaction, Transaction};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        kind TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT,
        amount_cents INTEGER NOT NULL
    );
";

/// Store backed by an embedded SQLite database
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file
    pub fn open(path: impl AsRef<Path>) -> FinDashResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|e| {
            FinDashError::StoreUnavailable(format!(
                "Failed to open database {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { path, conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> FinDashResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for SqliteStore {
    fn init(&self) -> FinDashResult<()> {
        self.conn.execute_batch(CREATE_TABLE).map_err(|e| {
            FinDashError::StoreUnavailable(format!(
                "Failed to prepare database {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "sqlite store ready");
        Ok(())
    }

    fn add(&self, input: NewTransaction) -> FinDashResult<Transaction> {
        input.validate()?;

        let description = if input.description.is_empty() {
            None
        } else {
            Some(input.description.as_str())
        };

        self.conn
            .execute(
                "INSERT INTO transactions (date, kind, category, description, amount_cents)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    input.date.format(DATE_FORMAT).to_string(),
                    input.kind.as_str(),
                    input.category,
                    description,
                    input.amount.cents(),
                ],
            )
            .map_err(|e| FinDashError::StoreWriteFailed(e.to_string()))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category = %input.category, "inserted transaction");
        Ok(input.into_transaction(id))
    }

    fn list(&self) -> FinDashResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, kind, category, description, amount_cents
             FROM transactions ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RawRecord {
                id: Some(row.get::<_, i64>(0)?.to_string()),
                date: row.get(1)?,
                kind: row.get(2)?,
                category: row.get(3)?,
                description: row.get(4)?,
                amount: Some(RawAmount::Cents(row.get(5)?)),
            })
        })?;

        let mut transactions = Vec::new();
        for (index, row) in rows.enumerate() {
            let raw = match row {
                Ok(raw) => raw,
                Err(
                    e @ (rusqlite::Error::InvalidColumnType(..)
                    | rusqlite::Error::FromSqlConversionFailure(..)),
                ) => {
                    tracing::warn!(row = index + 1, error = %e, "skipping unreadable row");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match raw.parse() {
                Ok(txn) => transactions.push(txn),
                Err(e) => {
                    tracing::warn!(row = index + 1, error = %e, "skipping malformed record");
                }
            }
        }

        tracing::debug!(count = transactions.len(), "listed transactions");
        Ok(transactions)
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.init().unwrap();
        store
    }

    fn expense(category: &str, cents: i64) -> NewTransaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            TransactionKind::Expense,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_ids_are_assigned_in_order() {
        let store = store();
        let first = store.add(expense("Moradia", 100_000)).unwrap();
        let second = store.add(expense("Lazer", 4_500)).unwrap();
        assert!(second.id > first.id);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_invalid_input_never_reaches_table() {
        let store = store();
        let err = store.add(expense("Moradia", -1)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let store = store();
        store.add(expense("Moradia", 100_000)).unwrap();
        store
            .conn
            .execute(
                "INSERT INTO transactions (date, kind, category, description, amount_cents)
                 VALUES ('not-a-date', 'expense', 'Lazer', NULL, 100)",
                [],
            )
            .unwrap();
        store
            .conn
            .execute(
                "INSERT INTO transactions (date, kind, category, description, amount_cents)
                 VALUES ('2024-05-02', 'gift', 'Lazer', NULL, 100)",
                [],
            )
            .unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, "Moradia");
    }

    #[test]
    fn test_add_without_init_fails_loudly() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = store.add(expense("Moradia", 100)).unwrap_err();
        assert!(matches!(err, FinDashError::StoreWriteFailed(_)));
    }
}
