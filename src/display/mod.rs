//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use transaction::{format_added, format_transaction_table};
