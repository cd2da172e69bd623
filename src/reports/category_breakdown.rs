//! Expense totals per category (the pie chart)

use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Sum expenses per category
///
/// Income is ignored. Categories without expenses are absent, so an empty map
/// means there is nothing to chart.
pub fn compute_category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, Money> {
    let mut breakdown: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *breakdown.entry(txn.category.clone()).or_default() += txn.amount;
    }

    breakdown
}

/// Share of total expense per category, as a percentage (0-100)
///
/// Returns categories ordered by amount, largest first. Zero-amount expenses
/// yield a 0% share rather than a division by zero.
pub fn category_share(breakdown: &BTreeMap<String, Money>) -> Vec<(String, Money, f64)> {
    let total: Money = breakdown.values().sum();

    let mut shares: Vec<_> = breakdown
        .iter()
        .map(|(category, amount)| {
            let pct = amount.ratio_of(total).map_or(0.0, |r| r * 100.0);
            (category.clone(), *amount, pct)
        })
        .collect();

    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    shares
}
