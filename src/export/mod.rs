//! Export module for FinDash
//!
//! Provides data export in multiple formats:
//! - CSV: transactions and budget rows (spreadsheet-compatible)
//! - JSON: machine-readable dashboard export
//! - YAML: human-readable dashboard export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
