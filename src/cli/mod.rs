//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod report;
pub mod transaction;

pub use report::{handle_export_command, handle_report_command, ExportArgs, ReportArgs, ReportFormat};
pub use transaction::{
    handle_add_command, handle_categories_command, handle_list_command, AddArgs, ListArgs,
};

use chrono::NaiveDate;

use crate::error::{FinDashError, FinDashResult};

/// Parse a YYYY-MM-DD date given on the command line
pub fn parse_date(date_str: &str) -> FinDashResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        FinDashError::InvalidInput(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}
