//! Transaction display formatting
//!
//! Renders stored transactions as a table for the `list` command.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, newest first, at most `limit` rows
pub fn format_transaction_table(
    transactions: &[Transaction],
    limit: usize,
    currency: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    let rows: Vec<TransactionRow> = sorted
        .into_iter()
        .take(limit)
        .map(|txn| TransactionRow {
            id: txn.id,
            date: txn.date.format(date_format).to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            description: truncate(&txn.description, 30),
            amount: txn.amount.format_with_symbol(currency),
        })
        .collect();

    let shown = rows.len();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    if shown < transactions.len() {
        output.push_str(&format!(
            "Showing {} of {} transactions.\n",
            shown,
            transactions.len()
        ));
    }
    output
}

/// One-line confirmation after recording a transaction
pub fn format_added(txn: &Transaction, currency: &str) -> String {
    let mut line = format!(
        "Recorded #{}: {} {} {} on {}",
        txn.id,
        txn.kind,
        txn.category,
        txn.amount.format_with_symbol(currency),
        txn.date.format("%Y-%m-%d")
    );
    if !txn.description.is_empty() {
        line.push_str(&format!(" ({})", txn.description));
    }
    line
}
