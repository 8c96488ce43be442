use std::{fmt, path::Path, path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use showbiz_domain::FinanceRecord;

use crate::CoreError;

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The collection was empty; nothing was written and any existing file is untouched.
    NothingToSave,
    Written { path: PathBuf, count: usize },
}

/// Records parsed from a file plus the number of lines skipped in lenient mode.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<FinanceRecord>,
    pub skipped: usize,
}

/// How a loader reacts to a malformed line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Abort the whole load on the first bad line.
    #[default]
    Strict,
    /// Skip bad lines with a warning and report how many were dropped.
    Lenient,
}

/// Date pattern shared by writer and reader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    #[default]
    Iso,
    /// `dd.MM.yyyy`
    Dotted,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::Dotted => "%d.%m.%Y",
        }
    }

    /// Human-readable form of the pattern, for prompts and errors.
    pub fn hint(self) -> &'static str {
        match self {
            DateFormat::Iso => "yyyy-MM-dd",
            DateFormat::Dotted => "dd.MM.yyyy",
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    pub fn parse(self, value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value.trim(), self.pattern())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "iso" | "yyyy-mm-dd" => Ok(DateFormat::Iso),
            "dotted" | "dd.mm.yyyy" => Ok(DateFormat::Dotted),
            other => Err(format!("unknown date format `{other}`")),
        }
    }
}

/// Column layout of a persisted record line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// `kind,amount,description,date,category`
    #[default]
    Full,
    /// `kind,amount,description,date`; categories fall back to the kind's catch-all bucket.
    Compact,
}

impl RecordLayout {
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            RecordLayout::Full => &["kind", "amount", "description", "date", "category"],
            RecordLayout::Compact => &["kind", "amount", "description", "date"],
        }
    }
}

/// Abstraction over persistence backends capable of storing finance records.
pub trait RecordStorage: Send + Sync {
    /// Writes `records` to `path`, overwriting it. Empty input performs no write.
    fn save_records(&self, path: &Path, records: &[FinanceRecord])
        -> Result<SaveOutcome, CoreError>;

    /// Parses every record in `path`, validating dates against `today`.
    fn load_records(&self, path: &Path, today: NaiveDate) -> Result<LoadReport, CoreError>;
}
