//! Transaction storage for FinDash
//!
//! A store persists transactions and hands back the full set on demand.
//! Two interchangeable backends exist, selected through [`Settings::backend`]:
//!
//! - [`SqliteStore`]: embedded SQLite database
//! - [`SheetStore`]: CSV worksheet with a header row
//!
//! [`Settings::backend`]: crate::config::Settings::backend

pub mod file_io;
pub mod record;
pub mod sheet;
pub mod sqlite;

pub use record::{RawAmount, RawRecord};
pub use sheet::SheetStore;
pub use sqlite::SqliteStore;

use crate::config::{FinDashPaths, StoreBackend};
use crate::error::FinDashResult;
use crate::models::{NewTransaction, Transaction};

/// Persistence capability used by the CLI and dashboards
pub trait TransactionStore {
    /// Ensure the backing storage exists with the expected layout (idempotent)
    fn init(&self) -> FinDashResult<()>;

    /// Validate and append one transaction, returning it with its assigned id
    fn add(&self, input: NewTransaction) -> FinDashResult<Transaction>;

    /// Every well-formed transaction, in storage order
    fn list(&self) -> FinDashResult<Vec<Transaction>>;

    /// Short backend name for messages
    fn name(&self) -> &'static str;
}

/// Open the store selected by configuration
pub fn open_store(
    backend: StoreBackend,
    paths: &FinDashPaths,
) -> FinDashResult<Box<dyn TransactionStore>> {
    paths.ensure_directories()?;

    let store: Box<dyn TransactionStore> = match backend {
        StoreBackend::Sqlite => Box::new(SqliteStore::open(paths.database_file())?),
        StoreBackend::Sheet => Box::new(SheetStore::new(paths.sheet_file())),
    };

    tracing::debug!(backend = store.name(), "opened transaction store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_inputs() -> Vec<NewTransaction> {
        vec![
            NewTransaction::new(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                TransactionKind::Income,
                "Salário",
                Money::from_units_cents(5000, 0),
            ),
            NewTransaction::new(
                NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
                TransactionKind::Expense,
                "Moradia",
                Money::from_units_cents(1600, 0),
            )
            .with_description("aluguel, maio"),
        ]
    }

    fn round_trip(backend: StoreBackend) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinDashPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_store(backend, &paths).unwrap();
        store.init().unwrap();
        store.init().unwrap();

        let inputs = sample_inputs();
        for input in &inputs {
            let stored = store.add(input.clone()).unwrap();
            assert!(stored.matches(input));
        }

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), inputs.len());
        for input in &inputs {
            assert!(listed.iter().any(|t| t.matches(input)), "missing {:?}", input);
        }

        let mut ids: Vec<_> = listed.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), listed.len());
    }

    #[test]
    fn test_sqlite_round_trip() {
        round_trip(StoreBackend::Sqlite);
    }

    #[test]
    fn test_sheet_round_trip() {
        round_trip(StoreBackend::Sheet);
    }

    #[test]
    fn test_backends_are_separate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinDashPaths::with_base_dir(temp_dir.path().to_path_buf());

        let sqlite = open_store(StoreBackend::Sqlite, &paths).unwrap();
        sqlite.init().unwrap();
        sqlite.add(sample_inputs().remove(0)).unwrap();

        let sheet = open_store(StoreBackend::Sheet, &paths).unwrap();
        sheet.init().unwrap();

        assert_eq!(sqlite.name(), "sqlite");
        assert_eq!(sheet.name(), "sheet");
        assert!(sheet.list().unwrap().is_empty());
    }
}
