use serde::{Deserialize, Serialize};
use showbiz_core::storage::{DateFormat, LoadMode, RecordLayout};
use showbiz_storage_text::CodecOptions;
use std::path::PathBuf;

use crate::ConfigError;

const RECORDS_DIR: &str = "Showbiz";
const RECORDS_FILE_NAME: &str = "finance_records.csv";

/// Stores user-configurable shell preferences and persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom records file. Defaults to `~/Documents/Showbiz/finance_records.csv`.
    pub records_file: Option<PathBuf>,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default = "Config::default_include_header")]
    pub include_header: bool,
    #[serde(default)]
    pub load_mode: LoadMode,
    #[serde(default)]
    pub layout: RecordLayout,
    #[serde(default)]
    pub enforce_category_kind: bool,
    #[serde(default = "Config::default_autosave")]
    pub autosave: bool,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_file: None,
            date_format: DateFormat::default(),
            include_header: Self::default_include_header(),
            load_mode: LoadMode::default(),
            layout: RecordLayout::default(),
            enforce_category_kind: false,
            autosave: Self::default_autosave(),
            currency: Self::default_currency(),
        }
    }
}

impl Config {
    pub fn default_include_header() -> bool {
        true
    }

    pub fn default_autosave() -> bool {
        true
    }

    pub fn default_currency() -> String {
        "EUR".into()
    }

    pub fn resolve_records_file(&self) -> PathBuf {
        if let Some(path) = &self.records_file {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(RECORDS_DIR).join(RECORDS_FILE_NAME)
    }

    /// Codec settings derived from the persistence preferences.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_header(self.include_header)
            .with_date_format(self.date_format)
            .with_layout(self.layout)
            .with_load_mode(self.load_mode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "currency",
                reason: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}
