//! JSON Export functionality
//!
//! Exports the computed dashboard together with the transactions it was
//! computed from.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{FinDashError, FinDashResult};
use crate::models::{BudgetTarget, Transaction};
use crate::reports::Dashboard;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export structure
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: &'static str,
    pub budget_targets: &'a [BudgetTarget],
    pub dashboard: &'a Dashboard,
    pub transactions: &'a [Transaction],
}

impl<'a> DashboardExport<'a> {
    pub fn new(
        dashboard: &'a Dashboard,
        targets: &'a [BudgetTarget],
        transactions: &'a [Transaction],
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            budget_targets: targets,
            dashboard,
            transactions,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_dashboard_json<W: Write + ?Sized>(
    export: &DashboardExport<'_>,
    writer: &mut W,
) -> FinDashResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| FinDashError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinDashError::Export(e.to_string()))?;
    Ok(())
}
