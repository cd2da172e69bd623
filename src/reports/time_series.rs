//! Daily totals per kind (the grouped bar chart)

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Total for one (date, kind) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub total: Money,
}

/// Group by (date, kind) and sum
///
/// Output is ascending by date with income before expense on the same day.
/// Days without transactions are not filled in.
pub fn compute_time_series(transactions: &[Transaction]) -> Vec<TimeSeriesPoint> {
    let mut grouped: BTreeMap<(NaiveDate, TransactionKind), Money> = BTreeMap::new();

    for txn in transactions {
        *grouped.entry((txn.date, txn.kind)).or_default() += txn.amount;
    }

    grouped
        .into_iter()
        .map(|((date, kind), total)| TimeSeriesPoint { date, kind, total })
        .collect()
}
