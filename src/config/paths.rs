//! Path management for my-finances
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `MY_FINANCES_DATA_DIR` environment variable (if set)
//! 3. `$XDG_CONFIG_HOME/my-finances` (if set)
//! 4. The platform config directory, e.g. `~/.config/my-finances` or
//!    `%APPDATA%\my-finances`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MY_FINANCES_DATA_DIR";

const APP_DIR_NAME: &str = "my-finances";

/// Manages all paths used by my-finances
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for all my-finances data
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use `dir` if given, otherwise resolve from the environment
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self, FinanceError> {
        match dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the stored ledger
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }

    let base = BaseDirs::new()
        .ok_or_else(|| FinanceError::Config("Could not determine home directory".into()))?;
    Ok(base.config_dir().join(APP_DIR_NAME))
}
