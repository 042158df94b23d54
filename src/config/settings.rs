//! User settings for Wallet Watch
//!
//! Manages user preferences: currency symbol, storage slot key, how edits
//! treat the original entry, the initial list filter, and log verbosity.

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;
use crate::models::TypeFilter;

/// How the Edit action treats the entry being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// Remove the entry as soon as it is loaded into the form (default).
    /// Abandoning the edit loses the entry.
    #[default]
    RemoveOnLoad,
    /// Keep the entry until the replacement is submitted successfully
    RemoveOnSubmit,
}

/// User settings for Wallet Watch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used for every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Key of the persistence slot holding the transaction list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Edit behavior
    #[serde(default)]
    pub edit_mode: EditMode,

    /// Filter applied when a session starts
    #[serde(default)]
    pub default_filter: TypeFilter,

    /// Log level directive (overridden by `WALLET_WATCH_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_storage_key() -> String {
    "walletWatchTransactions".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            storage_key: default_storage_key(),
            edit_mode: EditMode::default(),
            default_filter: TypeFilter::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return default settings if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WalletError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings that would make the storage slot unusable
    pub fn validate(&self) -> Result<(), WalletError> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(WalletError::Config("storage_key must not be empty".into()));
        }
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(WalletError::Config(format!(
                "storage_key '{}' must be a plain name",
                self.storage_key
            )));
        }
        Ok(())
    }
}
