//! User settings for my-finances
//!
//! Display preferences and defaults used by the command-line front end.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::DEFAULT_INCOME_CATEGORY;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for my-finances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category used for income when none is given
    #[serde(default = "default_income_category")]
    pub default_income_category: String,

    /// Number of transactions `list` shows when no limit is given
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_income_category() -> String {
    DEFAULT_INCOME_CATEGORY.to_string()
}

fn default_list_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_income_category: default_income_category(),
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist them.
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        read_json(paths.settings_file()).map_err(|e| {
            FinanceError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
