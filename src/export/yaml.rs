//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable layout.

use std::io::Write;

use super::json::DashboardExport;
use crate::error::{FinDashError, FinDashResult};

/// Write the export as YAML with a short header comment
pub fn export_dashboard_yaml<W: Write + ?Sized>(
    export: &DashboardExport<'_>,
    writer: &mut W,
) -> FinDashResult<()> {
    let export_err = |e: std::io::Error| FinDashError::Export(e.to_string());

    writeln!(writer, "# FinDash Dashboard Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinDashError::Export(e.to_string()))?;

    Ok(())
}
