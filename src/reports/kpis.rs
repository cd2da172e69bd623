//! Headline figures: total income, total expense and balance

use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Totals across every transaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`, may be negative
    pub balance: Money,
}

/// Sum income and expense over all transactions
pub fn compute_kpis(transactions: &[Transaction]) -> Kpis {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => total_income += txn.amount,
            TransactionKind::Expense => total_expense += txn.amount,
        }
    }

    Kpis {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}
