//! Reports module for FinDash
//!
//! Turns a flat list of transactions into the figures the dashboard shows:
//! headline totals, expenses by category, daily totals and monthly budget
//! progress. Every function here is pure and leaves its input untouched.

pub mod budget_progress;
pub mod category_breakdown;
pub mod dashboard;
pub mod kpis;
pub mod time_series;

pub use budget_progress::{compute_budget_progress, AlertLevel, BudgetProgress};
pub use category_breakdown::{category_share, compute_category_breakdown};
pub use dashboard::Dashboard;
pub use kpis::{compute_kpis, Kpis};
pub use time_series::{compute_time_series, TimeSeriesPoint};
