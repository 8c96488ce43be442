#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use showbiz::cli::{CliMode, ShellContext};
use showbiz_config::{Config, ConfigManager};
use showbiz_core::FixedClock;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

/// Creates a unique base directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Shell context in script mode over an isolated directory and a pinned clock.
pub fn setup_shell(config: Config) -> (ShellContext, PathBuf) {
    let base = temp_base();
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    let records_path = base.join("finance_records.csv");
    let context = ShellContext::with_parts(
        CliMode::Script,
        config_manager,
        config,
        records_path.clone(),
        Box::new(FixedClock(today())),
    );
    (context, records_path)
}
