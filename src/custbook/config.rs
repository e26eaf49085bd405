use crate::currency;
use crate::error::{CustbookError, Result};
use crate::i18n::Language;
use crate::layout::{DateFormat, PageSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Settings for custbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustbookConfig {
    /// UI language for headings and empty-state text
    #[serde(default)]
    pub language: Language,

    /// Currency given to new entries when none is specified
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Currencies entries may be tagged with
    #[serde(default = "currency::default_active")]
    pub active_currencies: Vec<String>,

    /// Paper size for PDF exports
    #[serde(default)]
    pub page_size: PageSize,

    /// How entry dates are printed in exports
    #[serde(default)]
    pub date_format: DateFormat,
}

fn default_currency() -> String {
    currency::DEFAULT_CURRENCY.to_string()
}

impl Default for CustbookConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_currency: default_currency(),
            active_currencies: currency::default_active(),
            page_size: PageSize::default(),
            date_format: DateFormat::default(),
        }
    }
}

impl CustbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CustbookError::Io)?;
        let config: CustbookConfig =
            serde_json::from_str(&content).map_err(CustbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CustbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CustbookError::Serialization)?;
        fs::write(config_path, content).map_err(CustbookError::Io)?;
        Ok(())
    }

    /// Remove the config file so the next load yields defaults
    pub fn reset<P: AsRef<Path>>(config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if config_path.exists() {
            fs::remove_file(config_path).map_err(CustbookError::Io)?;
        }
        Ok(())
    }

    pub const KEYS: &'static [&'static str] = &[
        "language",
        "default-currency",
        "active-currencies",
        "page-size",
        "date-format",
    ];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "language" => Some(self.language.to_string()),
            "default-currency" => Some(self.default_currency.clone()),
            "active-currencies" => Some(self.active_currencies.join(",")),
            "page-size" => Some(self.page_size.to_string()),
            "date-format" => Some(self.date_format.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "language" => {
                self.language = value.parse().map_err(|e: CustbookError| e.to_string())?;
            }
            "default-currency" => {
                currency::set_default(self, value).map_err(|e| e.to_string())?;
            }
            "active-currencies" => {
                let codes: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                currency::set_active(self, &codes).map_err(|e| e.to_string())?;
            }
            "page-size" => {
                self.page_size = value.parse().map_err(|e: CustbookError| e.to_string())?;
            }
            "date-format" => {
                self.date_format = value.parse().map_err(|e: CustbookError| e.to_string())?;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
