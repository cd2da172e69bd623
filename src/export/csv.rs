//! CSV Export functionality
//!
//! Exports stored transactions to a spreadsheet-compatible file.

use std::io::Write;

use crate::error::{FinDashError, FinDashResult};
use crate::models::Transaction;

/// Export transactions to CSV, ordered by date then id
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinDashResult<()> {
    let export_err = |e: csv::Error| FinDashError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Kind", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    for txn in sorted {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                txn.category.clone(),
                txn.description.clone(),
                txn.amount.to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinDashError::Export(e.to_string()))?;
    Ok(())
}
