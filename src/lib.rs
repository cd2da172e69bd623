//! FinDash - Personal finance tracker
//!
//! This library provides the core functionality for FinDash: recording
//! income and expense transactions, persisting them to a local store and
//! summarizing them as KPIs, charts and monthly budget progress.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, targets)
//! - `store`: Transaction stores (SQLite and CSV worksheet)
//! - `reports`: Aggregations behind the dashboard
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::config::{FinDashPaths, Settings};
//! use findash::store::open_store;
//!
//! let paths = FinDashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_store(settings.backend, &paths)?;
//! store.init()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod store;
pub mod tui;

pub use error::FinDashError;
