//! User settings for the expense tracker
//!
//! Manages which workbook the ledger writes to and how amounts and dates are
//! shown.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::LedgerError;
use crate::services::DEFAULT_DATE_WINDOW_DAYS;

/// Widest accepted date window, about a century either side of today
pub const MAX_DATE_WINDOW_DAYS: i64 = 36_500;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Title of the workbook holding the expenses and budgets sheets
    #[serde(default = "default_workbook_title")]
    pub workbook_title: String,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many days before or after today an expense may be dated
    #[serde(default = "default_date_window_days")]
    pub date_window_days: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_workbook_title() -> String {
    "expense_tracker".to_string()
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_date_window_days() -> i64 {
    DEFAULT_DATE_WINDOW_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            workbook_title: default_workbook_title(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            date_window_days: default_date_window_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.workbook_title.trim().is_empty() {
            return Err(LedgerError::Config("workbook_title cannot be empty".into()));
        }
        let bad_format = chrono::format::StrftimeItems::new(&self.date_format)
            .any(|item| matches!(item, chrono::format::Item::Error));
        if bad_format {
            return Err(LedgerError::Config(format!(
                "date_format '{}' is not a valid strftime format",
                self.date_format
            )));
        }
        if !(0..=MAX_DATE_WINDOW_DAYS).contains(&self.date_window_days) {
            return Err(LedgerError::Config(format!(
                "date_window_days must be between 0 and {}",
                MAX_DATE_WINDOW_DAYS
            )));
        }
        Ok(())
    }
}
