//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are immutable once
//! stored; the store assigns the id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::is_known_category;
use super::money::Money;
use crate::error::FinDashError;

/// Whether money came in or went out
///
/// `Income` orders before `Expense`, which fixes the order of same-day entries
/// in the time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Label used when persisting the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinDashError;

    /// Accepts `income`/`expense` in any case, plus the Portuguese labels
    /// `Receita`/`Despesa` found in older spreadsheets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            other => Err(FinDashError::InvalidInput(format!(
                "Unknown transaction kind '{}'. Use 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// A stored financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the store
    pub id: i64,

    pub date: NaiveDate,

    pub kind: TransactionKind,

    /// Category name (exact, case-sensitive)
    pub category: String,

    /// Free text, empty when not given
    #[serde(default)]
    pub description: String,

    /// Non-negative amount
    pub amount: Money,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check whether the fields (everything but the id) match a submitted input
    pub fn matches(&self, input: &NewTransaction) -> bool {
        self.date == input.date
            && self.kind == input.kind
            && self.category == input.category
            && self.description == input.description
            && self.amount == input.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Input for recording a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl NewTransaction {
    /// Create an input with an empty description
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            description: String::new(),
            amount,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    /// Validate the input before it is handed to a store
    pub fn validate(&self) -> Result<(), FinDashError> {
        if self.amount.is_negative() {
            return Err(FinDashError::InvalidInput(format!(
                "Amount must not be negative (got {})",
                self.amount
            )));
        }

        if self.amount > Money::MAX_TRANSACTION {
            return Err(FinDashError::InvalidInput(format!(
                "Amount {} exceeds the maximum of {}",
                self.amount,
                Money::MAX_TRANSACTION
            )));
        }

        if !is_known_category(&self.category) {
            return Err(FinDashError::InvalidInput(format!(
                "Unknown category '{}'",
                self.category
            )));
        }

        Ok(())
    }

    /// Attach a store-assigned id
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            kind: self.kind,
            category: self.category,
            description: self.description,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!("Receita".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("DESPESA".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_ordering() {
        assert!(TransactionKind::Income < TransactionKind::Expense);
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let input = NewTransaction::new(
            may(1),
            TransactionKind::Expense,
            "Moradia",
            Money::from_cents(-100),
        );
        let err = input.validate().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let input = NewTransaction::new(
            may(1),
            TransactionKind::Expense,
            "Groceries",
            Money::from_cents(100),
        );
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_amount_above_maximum() {
        let at_max = NewTransaction::new(
            may(1),
            TransactionKind::Income,
            "Salário",
            Money::MAX_TRANSACTION,
        );
        assert!(at_max.validate().is_ok());

        let above = NewTransaction::new(
            may(1),
            TransactionKind::Income,
            "Salário",
            Money::MAX_TRANSACTION + Money::from_cents(1),
        );
        assert!(above.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let input = NewTransaction::new(may(1), TransactionKind::Income, "Salário", Money::zero());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_into_transaction_matches_input() {
        let input = NewTransaction::new(
            may(15),
            TransactionKind::Expense,
            "Lazer",
            Money::from_cents(4590),
        )
        .with_description("  cinema ");
        assert_eq!(input.description, "cinema");

        let txn = input.clone().into_transaction(7);
        assert_eq!(txn.id, 7);
        assert!(txn.matches(&input));
        assert!(txn.is_expense());
        assert_eq!(txn.to_string(), "#7 2024-05-15 Expense Lazer 45.90");
    }
}
