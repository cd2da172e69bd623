//! Dashboard
//!
//! Everything the dashboard shows, computed in one go from the full
//! transaction list. Recomputed on every render and never stored.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::budget_progress::{compute_budget_progress, BudgetProgress};
use super::category_breakdown::{category_share, compute_category_breakdown};
use super::kpis::{compute_kpis, Kpis};
use super::time_series::{compute_time_series, TimeSeriesPoint};
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::{FinDashError, FinDashResult};
use crate::models::{BudgetTarget, Money, Transaction, TransactionKind};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;

/// All aggregates for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Month used for budget progress
    pub reference_date: NaiveDate,
    pub transaction_count: usize,
    pub kpis: Kpis,
    pub expense_by_category: BTreeMap<String, Money>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub budget_progress: Vec<BudgetProgress>,
}

impl Dashboard {
    /// Compute every aggregate
    pub fn compute(
        transactions: &[Transaction],
        targets: &[BudgetTarget],
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            reference_date,
            transaction_count: transactions.len(),
            kpis: compute_kpis(transactions),
            expense_by_category: compute_category_breakdown(transactions),
            time_series: compute_time_series(transactions),
            budget_progress: compute_budget_progress(transactions, targets, reference_date),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str("FinDash - Personal Finance\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        if self.transaction_count == 0 {
            output.push_str("No transactions recorded yet.\n");
            output.push_str("Add one with 'findash add <amount> --kind expense --category <name>'.\n");
            return output;
        }

        output.push_str(&format!("{:<14} {:>18}\n", "Income", money(self.kpis.total_income)));
        output.push_str(&format!("{:<14} {:>18}\n", "Expenses", money(self.kpis.total_expense)));
        output.push_str(&format!("{:<14} {:>18}\n", "Balance", money(self.kpis.balance)));

        // Expenses by category
        output.push('\n');
        output.push_str("Expenses by Category\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let shares = category_share(&self.expense_by_category);
        if shares.is_empty() {
            output.push_str("No expenses recorded for the chart.\n");
        } else {
            for (category, amount, pct) in &shares {
                output.push_str(&format!(
                    "{:<16} {} {:>7} {:>16}\n",
                    truncate(category, 16),
                    format_bar(*pct, 100.0, BAR_WIDTH),
                    format_percentage(*pct),
                    money(*amount)
                ));
            }
        }

        // Daily totals
        output.push('\n');
        output.push_str("Over Time\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let max_total = self
            .time_series
            .iter()
            .map(|p| p.total.as_f64())
            .fold(0.0, f64::max);
        for point in &self.time_series {
            let marker = match point.kind {
                TransactionKind::Income => '+',
                TransactionKind::Expense => '-',
            };
            output.push_str(&format!(
                "{} {} {} {:>16}\n",
                point.date.format("%Y-%m-%d"),
                marker,
                format_bar(point.total.as_f64(), max_total, BAR_WIDTH),
                money(point.total)
            ));
        }

        // Budget targets
        output.push('\n');
        output.push_str(&format!(
            "Budget Targets for {}\n",
            self.reference_date.format("%B %Y")
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.budget_progress.is_empty() {
            output.push_str("No budget targets configured.\n");
        }
        for progress in &self.budget_progress {
            output.push_str(&format!(
                "{:<16} {} {:>7}\n",
                truncate(&progress.category, 16),
                format_bar(progress.fraction(), 1.0, BAR_WIDTH),
                format!("{:.1}%", progress.percent * 100.0)
            ));
            output.push_str(&format!(
                "  Spent: {} / Target: {}\n",
                money(progress.spent),
                money(progress.limit)
            ));
            if let Some(message) = progress.alert.message() {
                output.push_str(&format!("  {}\n", message));
            }
        }

        output
    }

    /// Export the budget rows to CSV format
    pub fn export_budget_csv<W: Write>(&self, writer: W) -> FinDashResult<()> {
        let export_err = |e: csv::Error| FinDashError::Export(e.to_string());
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["month", "category", "spent", "limit", "percent", "alert"])
            .map_err(export_err)?;

        for progress in &self.budget_progress {
            csv_writer
                .write_record([
                    self.reference_date.format("%Y-%m").to_string(),
                    progress.category.clone(),
                    progress.spent.to_string(),
                    progress.limit.to_string(),
                    format!("{:.4}", progress.percent),
                    progress.alert.to_string(),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinDashError::Export(e.to_string()))?;
        Ok(())
    }
}
