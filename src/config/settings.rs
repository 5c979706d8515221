//! User settings for SiteKick
//!
//! User preferences plus the business profile printed on quotes. The profile
//! is deliberately an explicit value handed to whatever formats a quote, not
//! ambient state looked up from somewhere global.

use serde::{Deserialize, Serialize};

use super::paths::SiteKickPaths;
use crate::error::SiteKickError;

/// The contractor's business details, shown in quote headers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BusinessProfile {
    /// Company or sole-trader name
    #[serde(default)]
    pub company_name: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Contact email
    #[serde(default)]
    pub email: String,
}

impl BusinessProfile {
    /// Check if any profile field has been filled in
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

/// User settings for SiteKick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in all formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Unit of measure suggested for new quote items
    #[serde(default = "default_unit")]
    pub default_unit: String,

    /// Business details printed on quotes
    #[serde(default)]
    pub business: BusinessProfile,
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

fn default_unit() -> String {
    "pcs".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_unit: default_unit(),
            business: BusinessProfile::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &SiteKickPaths) -> Result<Self, SiteKickError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SiteKickError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SiteKickError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SiteKickPaths) -> Result<(), SiteKickError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SiteKickError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SiteKickError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
