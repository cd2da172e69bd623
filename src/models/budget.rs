//! Monthly budget targets
//!
//! A target caps spending in one category for the current month. Targets are
//! configuration, not stored data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTarget {
    pub category: String,
    pub limit: Money,
}

impl BudgetTarget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// The targets used when none are configured
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Alimentação", Money::from_units_cents(1500, 0)),
            Self::new("Transporte", Money::from_units_cents(800, 0)),
            Self::new("Lazer", Money::from_units_cents(500, 0)),
            Self::new("Moradia", Money::from_units_cents(2500, 0)),
        ]
    }
}

impl fmt::Display for BudgetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}
