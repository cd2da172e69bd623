//! Dashboard application state
//!
//! Holds the store handle and the most recently computed dashboard. The
//! dashboard is recomputed from a fresh `list()` on every refresh.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::reports::Dashboard;
use crate::store::TransactionStore;

/// State of the read-only dashboard
pub struct App<'a> {
    store: &'a dyn TransactionStore,
    pub settings: &'a Settings,
    /// Last successfully computed dashboard
    pub dashboard: Option<Dashboard>,
    /// Error from the last refresh, shown in the status bar
    pub error: Option<String>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(store: &'a dyn TransactionStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            dashboard: None,
            error: None,
            should_quit: false,
        }
    }

    /// Re-read the store and recompute everything
    ///
    /// A failed read keeps the previous dashboard on screen and reports the
    /// error instead of exiting.
    pub fn refresh(&mut self, today: NaiveDate) {
        match self.store.list() {
            Ok(transactions) => {
                self.dashboard = Some(Dashboard::compute(
                    &transactions,
                    &self.settings.budget_targets,
                    today,
                ));
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "dashboard refresh failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Apply a key press; returns true when a refresh was requested
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('r') | KeyCode::F(5) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FinDashError, FinDashResult};
    use crate::models::{Money, NewTransaction, Transaction, TransactionKind};
    use crate::store::SqliteStore;

    struct BrokenStore;

    impl TransactionStore for BrokenStore {
        fn init(&self) -> FinDashResult<()> {
            Ok(())
        }

        fn add(&self, _input: NewTransaction) -> FinDashResult<Transaction> {
            Err(FinDashError::StoreWriteFailed("read-only".into()))
        }

        fn list(&self) -> FinDashResult<Vec<Transaction>> {
            Err(FinDashError::StoreUnavailable("connection refused".into()))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_refresh_reads_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.init().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        app.refresh(today());
        assert_eq!(app.dashboard.as_ref().unwrap().transaction_count, 0);

        store
            .add(NewTransaction::new(
                today(),
                TransactionKind::Expense,
                "Lazer",
                Money::from_cents(45_000),
            ))
            .unwrap();
        app.refresh(today());

        let dashboard = app.dashboard.as_ref().unwrap();
        assert_eq!(dashboard.transaction_count, 1);
        assert_eq!(dashboard.budget_progress[2].category, "Lazer");
        assert_eq!(dashboard.budget_progress[2].percent, 0.9);
    }

    #[test]
    fn test_refresh_failure_is_reported() {
        let store = BrokenStore;
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        app.refresh(today());
        assert!(app.dashboard.is_none());
        assert_eq!(
            app.error.as_deref(),
            Some("Store unavailable: connection refused")
        );
        assert!(!app.should_quit);
    }

    #[test]
    fn test_keys() {
        let store = BrokenStore;
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        assert!(app.handle_key(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!app.should_quit);
        assert!(!app.handle_key(KeyEvent::from(KeyCode::Char('x'))));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
