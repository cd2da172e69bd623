//! Spreadsheet-backed transaction store
//!
//! Transactions live in a CSV worksheet whose first row is the header
//! `id,date,kind,category,description,amount`. Cells are plain text and may be
//! edited by hand, so every row is validated on the way out. Ids are assigned
//! as one past the largest id in the sheet.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::file_io::write_atomic;
use super::record::{RawAmount, RawRecord, DATE_FORMAT};
use super::TransactionStore;
use crate::error::{FinDashError, FinDashResult};
use crate::models::{NewTransaction, Transaction};

/// Column names of the worksheet, in order
pub const HEADER: [&str; 6] = ["id", "date", "kind", "category", "description", "amount"];

/// Store backed by a CSV worksheet
pub struct SheetStore {
    path: PathBuf,
}

/// Rows of the worksheet, read in one pass
struct SheetContents {
    rows: Vec<(usize, RawRecord)>,
    ends_with_newline: bool,
}

impl SheetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the header and every data row
    fn read_sheet(&self) -> FinDashResult<SheetContents> {
        let bytes = fs::read(&self.path).map_err(|e| {
            FinDashError::StoreUnavailable(format!(
                "Failed to read sheet {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers = reader.headers()?.clone();
        check_header(&headers)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            // Row 1 is the header
            let row = index + 2;
            match record {
                Ok(record) => rows.push((row, raw_from_record(&record))),
                Err(e) => tracing::warn!(row, error = %e, "skipping unreadable sheet row"),
            }
        }

        Ok(SheetContents {
            rows,
            ends_with_newline: bytes.last().map_or(true, |b| *b == b'\n'),
        })
    }
}

impl TransactionStore for SheetStore {
    fn init(&self) -> FinDashResult<()> {
        if self.path.exists() {
            self.read_sheet()?;
            tracing::debug!(path = %self.path.display(), "sheet store ready");
            return Ok(());
        }

        let mut header = HEADER.join(",");
        header.push('\n');
        write_atomic(&self.path, header.as_bytes()).map_err(|e| {
            FinDashError::StoreUnavailable(format!(
                "Failed to create sheet {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), "created sheet with header");
        Ok(())
    }

    fn add(&self, input: NewTransaction) -> FinDashResult<Transaction> {
        input.validate()?;

        let contents = self.read_sheet()?;
        let next_id = contents
            .rows
            .iter()
            .filter_map(|(_, raw)| raw.id.as_deref()?.trim().parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let write_failed = |e: &dyn std::fmt::Display| {
            FinDashError::StoreWriteFailed(format!(
                "Failed to append to sheet {}: {}",
                self.path.display(),
                e
            ))
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| write_failed(&e))?;

        if !contents.ends_with_newline {
            file.write_all(b"\n").map_err(|e| write_failed(&e))?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record([
                next_id.to_string(),
                input.date.format(DATE_FORMAT).to_string(),
                input.kind.as_str().to_string(),
                input.category.clone(),
                input.description.clone(),
                input.amount.to_string(),
            ])
            .map_err(|e| write_failed(&e))?;
        writer.flush().map_err(|e| write_failed(&e))?;

        tracing::debug!(id = next_id, category = %input.category, "appended sheet row");
        Ok(input.into_transaction(next_id))
    }

    fn list(&self) -> FinDashResult<Vec<Transaction>> {
        let contents = self.read_sheet()?;

        let mut transactions = Vec::with_capacity(contents.rows.len());
        for (row, raw) in contents.rows {
            match raw.parse() {
                Ok(txn) => transactions.push(txn),
                Err(e) => {
                    let e = e.at_row(row);
                    tracing::warn!(row, error = %e, "skipping malformed record");
                }
            }
        }

        tracing::debug!(count = transactions.len(), "listed transactions");
        Ok(transactions)
    }

    fn name(&self) -> &'static str {
        "sheet"
    }
}

/// The sheet must carry exactly the expected columns
fn check_header(headers: &StringRecord) -> FinDashResult<()> {
    let found: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    if found.iter().map(String::as_str).eq(HEADER.iter().copied()) {
        Ok(())
    } else {
        Err(FinDashError::StoreUnavailable(format!(
            "Unexpected sheet header '{}', expected '{}'",
            found.join(","),
            HEADER.join(",")
        )))
    }
}

/// Map cells by position; short rows leave the missing fields empty
fn raw_from_record(record: &StringRecord) -> RawRecord {
    let cell = |i: usize| record.get(i).map(str::to_string);
    RawRecord {
        id: cell(0),
        date: cell(1),
        kind: cell(2),
        category: cell(3),
        description: cell(4),
        amount: cell(5).map(RawAmount::Text),
    }
}
