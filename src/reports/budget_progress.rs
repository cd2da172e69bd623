//! Monthly budget progress
//!
//! Compares this month's spending per category against the configured
//! targets. Only expenses dated in the same calendar month and year as the
//! reference date count.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{BudgetTarget, Money, Transaction};

/// Spending fraction at which a budget turns to warning
pub const WARNING_THRESHOLD: f64 = 0.8;

/// Spending fraction at which a budget is exceeded
pub const EXCEEDED_THRESHOLD: f64 = 1.0;

/// How close a category is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Exceeded,
}

impl AlertLevel {
    /// Classify a spent/limit fraction
    pub fn from_percent(percent: f64) -> Self {
        if percent >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percent >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Message shown next to the progress bar, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("Warning: close to the limit"),
            Self::Exceeded => Some("BUDGET EXCEEDED!"),
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Progress of one category against its target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    /// `spent / limit`, unclamped; 0 when the limit is zero
    pub percent: f64,
    pub alert: AlertLevel,
}

impl BudgetProgress {
    /// Fill of a progress bar, capped at 1.0
    pub fn fraction(&self) -> f64 {
        self.percent.min(1.0)
    }
}

/// Whether a date falls in the same calendar month and year as `reference`
pub fn in_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Progress for each target, in target order
///
/// Categories without a target are not reported.
pub fn compute_budget_progress(
    transactions: &[Transaction],
    targets: &[BudgetTarget],
    reference_date: NaiveDate,
) -> Vec<BudgetProgress> {
    let this_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && in_same_month(t.date, reference_date))
        .collect();

    targets
        .iter()
        .map(|target| {
            let spent: Money = this_month
                .iter()
                .filter(|t| t.category == target.category)
                .map(|t| t.amount)
                .sum();

            let percent = spent.ratio_of(target.limit).unwrap_or(0.0);

            BudgetProgress {
                category: target.category.clone(),
                spent,
                limit: target.limit,
                percent,
                alert: AlertLevel::from_percent(percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &str, on: NaiveDate, cents: i64) -> Transaction {
        Transaction {
            id: 0,
            date: on,
            kind: TransactionKind::Expense,
            category: category.into(),
            description: String::new(),
            amount: Money::from_cents(cents),
        }
    }

    fn target(category: &str, cents: i64) -> BudgetTarget {
        BudgetTarget::new(category, Money::from_cents(cents))
    }

    #[test]
    fn test_alert_boundaries() {
        assert_eq!(AlertLevel::from_percent(0.0), AlertLevel::Normal);
        assert_eq!(AlertLevel::from_percent(0.79999), AlertLevel::Normal);
        assert_eq!(AlertLevel::from_percent(0.8), AlertLevel::Warning);
        assert_eq!(AlertLevel::from_percent(0.99999), AlertLevel::Warning);
        assert_eq!(AlertLevel::from_percent(1.0), AlertLevel::Exceeded);
        assert_eq!(AlertLevel::from_percent(1.5), AlertLevel::Exceeded);
    }

    #[test]
    fn test_percent_is_not_clamped() {
        let transactions = vec![expense("Lazer", date(2024, 5, 2), 75_000)];
        let progress = compute_budget_progress(
            &transactions,
            &[target("Lazer", 50_000)],
            date(2024, 5, 20),
        );
        assert_eq!(progress[0].percent, 1.5);
        assert_eq!(progress[0].fraction(), 1.0);
        assert_eq!(progress[0].alert, AlertLevel::Exceeded);
    }

    #[test]
    fn test_exact_thresholds_from_amounts() {
        let transactions = vec![
            expense("Moradia", date(2024, 5, 1), 200_000),
            expense("Lazer", date(2024, 5, 1), 50_000),
        ];
        let progress = compute_budget_progress(
            &transactions,
            &[target("Moradia", 250_000), target("Lazer", 50_000)],
            date(2024, 5, 31),
        );
        assert_eq!(progress[0].percent, 0.8);
        assert_eq!(progress[0].alert, AlertLevel::Warning);
        assert_eq!(progress[1].percent, 1.0);
        assert_eq!(progress[1].alert, AlertLevel::Exceeded);
    }

    #[test]
    fn test_zero_limit_is_zero_percent() {
        let transactions = vec![expense("Saúde", date(2024, 5, 3), 10_000)];
        let progress =
            compute_budget_progress(&transactions, &[target("Saúde", 0)], date(2024, 5, 3));
        assert_eq!(progress[0].spent.cents(), 10_000);
        assert_eq!(progress[0].percent, 0.0);
        assert!(!progress[0].percent.is_nan());
        assert_eq!(progress[0].alert, AlertLevel::Normal);
    }

    #[test]
    fn test_only_reference_month_and_year() {
        let transactions = vec![
            expense("Moradia", date(2024, 5, 1), 100_000),
            expense("Moradia", date(2024, 4, 30), 90_000),
            expense("Moradia", date(2023, 5, 10), 80_000),
            expense("Moradia", date(2024, 6, 1), 70_000),
        ];
        let progress = compute_budget_progress(
            &transactions,
            &[target("Moradia", 250_000)],
            date(2024, 5, 20),
        );
        assert_eq!(progress[0].spent.cents(), 100_000);
        assert_eq!(progress[0].percent, 0.4);
        assert_eq!(progress[0].alert, AlertLevel::Normal);
    }

    #[test]
    fn test_income_does_not_count() {
        let mut income = expense("Lazer", date(2024, 5, 1), 40_000);
        income.kind = TransactionKind::Income;
        let progress =
            compute_budget_progress(&[income], &[target("Lazer", 50_000)], date(2024, 5, 1));
        assert!(progress[0].spent.is_zero());
    }

    #[test]
    fn test_target_order_and_untargeted_categories() {
        let transactions = vec![
            expense("Outros", date(2024, 5, 1), 99_999),
            expense("Transporte", date(2024, 5, 1), 10_000),
        ];
        let targets = vec![
            target("Transporte", 80_000),
            target("Alimentação", 150_000),
            target("Lazer", 50_000),
        ];
        let progress = compute_budget_progress(&transactions, &targets, date(2024, 5, 1));

        let names: Vec<_> = progress.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(names, ["Transporte", "Alimentação", "Lazer"]);
        assert_eq!(progress[0].spent.cents(), 10_000);
        assert!(progress[1].spent.is_zero());
    }

    #[test]
    fn test_empty_transactions() {
        let progress =
            compute_budget_progress(&[], &BudgetTarget::defaults(), date(2024, 5, 1));
        assert_eq!(progress.len(), 4);
        assert!(progress.iter().all(|p| p.spent.is_zero() && p.percent == 0.0));
    }
}
