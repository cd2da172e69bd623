//! User settings for FinDash
//!
//! Manages the store backend selection, display preferences and the monthly
//! budget targets.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use super::paths::FinDashPaths;
use crate::error::FinDashError;
use crate::models::BudgetTarget;
use crate::store::file_io::{read_json, write_json_atomic};

/// Which transaction store implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Embedded SQLite database
    #[default]
    Sqlite,
    /// CSV worksheet with a header row
    Sheet,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Sheet => write!(f, "sheet"),
        }
    }
}

/// User settings for FinDash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Monthly spending limits, reported in this order
    #[serde(default = "BudgetTarget::defaults")]
    pub budget_targets: Vec<BudgetTarget>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backend: StoreBackend::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            budget_targets: BudgetTarget::defaults(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinDashPaths) -> Result<Self, FinDashError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let settings: Settings = read_json(&settings_path).map_err(|e| {
            FinDashError::Config(format!("Failed to load settings file: {}", e))
        })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinDashPaths) -> Result<(), FinDashError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject budget targets that cannot be reported and unusable date formats
    pub fn validate(&self) -> Result<(), FinDashError> {
        validate_date_format(&self.date_format)?;

        for target in &self.budget_targets {
            if target.category.trim().is_empty() {
                return Err(FinDashError::Config(
                    "Budget target with an empty category".into(),
                ));
            }
            if target.limit.is_negative() {
                return Err(FinDashError::Config(format!(
                    "Budget limit for '{}' must not be negative",
                    target.category
                )));
            }
        }
        Ok(())
    }
}

/// A date format must parse and render a plain date without time fields
fn validate_date_format(format: &str) -> Result<(), FinDashError> {
    let invalid = || FinDashError::Config(format!("Invalid date_format '{}'", format));

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // Specifiers such as %H parse but fail when rendering a date
    let sample = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or_else(invalid)?;
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).map_err(|_| invalid())
}
