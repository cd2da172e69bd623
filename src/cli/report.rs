//! CLI commands for reports
//!
//! Computes the dashboard from the full transaction list and prints or
//! exports it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use super::parse_date;
use crate::config::Settings;
use crate::error::{FinDashError, FinDashResult};
use crate::export::{
    export_dashboard_json, export_dashboard_yaml, export_transactions_csv, DashboardExport,
};
use crate::reports::Dashboard;
use crate::store::TransactionStore;

/// Output format for `findash report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Terminal dashboard
    #[default]
    Text,
    Json,
    Yaml,
    /// Budget progress rows only
    Csv,
}

/// Arguments for `findash report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Reference date for budget progress (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `findash export-csv`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Handle `findash report`
pub fn handle_report_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    args: ReportArgs,
) -> FinDashResult<()> {
    let reference_date = match &args.date {
        Some(date_str) => parse_date(date_str)?,
        None => chrono::Local::now().date_naive(),
    };

    let transactions = store.list()?;
    let dashboard = Dashboard::compute(&transactions, &settings.budget_targets, reference_date);
    let export = DashboardExport::new(&dashboard, &settings.budget_targets, &transactions);

    let render = |writer: &mut dyn Write| -> FinDashResult<()> {
        match args.format {
            ReportFormat::Text => write!(
                writer,
                "{}",
                dashboard.format_terminal(&settings.currency_symbol)
            )
            .map_err(|e| FinDashError::Export(e.to_string())),
            ReportFormat::Json => export_dashboard_json(&export, writer),
            ReportFormat::Yaml => export_dashboard_yaml(&export, writer),
            ReportFormat::Csv => dashboard.export_budget_csv(writer),
        }
    };

    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            render(&mut writer)?;
            writer
                .flush()
                .map_err(|e| FinDashError::Export(e.to_string()))?;
            println!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            render(&mut lock)?;
        }
    }

    Ok(())
}

/// Handle `findash export-csv`
pub fn handle_export_command(store: &dyn TransactionStore, args: ExportArgs) -> FinDashResult<()> {
    let transactions = store.list()?;
    let writer = create_output(&args.output)?;
    export_transactions_csv(&transactions, writer)?;
    println!(
        "Exported {} transactions to: {}",
        transactions.len(),
        args.output.display()
    );
    Ok(())
}

fn create_output(path: &Path) -> FinDashResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinDashError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
