//! Transaction CLI commands
//!
//! The input form (`add`) and the read-only listing (`list`).

use chrono::NaiveDate;
use clap::Args;

use super::parse_date;
use crate::config::Settings;
use crate::display::{format_added, format_transaction_table};
use crate::error::{FinDashError, FinDashResult};
use crate::models::{resolve_category, Money, NewTransaction, TransactionKind, CATEGORIES};
use crate::store::TransactionStore;

/// Arguments for `findash add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "150.00"), never negative
    pub amount: String,
    /// Transaction kind: expense or income
    #[arg(short, long, default_value = "expense")]
    pub kind: String,
    /// Category name (see `findash categories`)
    #[arg(short, long)]
    pub category: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Optional description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for `findash list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Turn raw form input into a validated transaction input
pub fn build_new_transaction(args: &AddArgs, today: NaiveDate) -> FinDashResult<NewTransaction> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        FinDashError::InvalidInput(format!(
            "Invalid amount '{}'. Use a format like '150.00'. Error: {}",
            args.amount, e
        ))
    })?;

    let kind: TransactionKind = args.kind.parse()?;

    let category = resolve_category(&args.category).ok_or_else(|| {
        FinDashError::InvalidInput(format!(
            "Unknown category '{}'. Choose one of: {}",
            args.category,
            CATEGORIES.join(", ")
        ))
    })?;

    let date = match &args.date {
        Some(date_str) => parse_date(date_str)?,
        None => today,
    };

    let input = NewTransaction::new(date, kind, category, amount)
        .with_description(args.description.clone().unwrap_or_default());
    input.validate()?;
    Ok(input)
}

/// Handle `findash add`
pub fn handle_add_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    args: AddArgs,
) -> FinDashResult<()> {
    let input = build_new_transaction(&args, chrono::Local::now().date_naive())?;
    let txn = store.add(input)?;
    println!("{}", format_added(&txn, &settings.currency_symbol));
    Ok(())
}

/// Handle `findash list`
pub fn handle_list_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    args: ListArgs,
) -> FinDashResult<()> {
    let transactions = store.list()?;
    print!(
        "{}",
        format_transaction_table(
            &transactions,
            args.limit,
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

/// Handle `findash categories`
pub fn handle_categories_command() {
    for category in CATEGORIES {
        println!("{}", category);
    }
}
