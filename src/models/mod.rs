//! Core data models for FinDash
//!
//! This module contains the data structures of the finance domain:
//! transactions, amounts, categories and budget targets.

pub mod budget;
pub mod category;
pub mod money;
pub mod transaction;

pub use budget::BudgetTarget;
pub use category::{is_known_category, resolve_category, CATEGORIES};
pub use money::{Money, MoneyParseError};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
