use showbiz_config::{Config, ConfigError, ConfigManager};
use showbiz_core::storage::{DateFormat, LoadMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn default_config_has_usable_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(cfg.include_header);
    assert!(cfg.autosave);
    assert_eq!(cfg.date_format, DateFormat::Iso);
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    assert_eq!(manager.load().expect("load config"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    assert_eq!(
        manager.config_path(),
        dir.path().join("config").join("config.json")
    );

    let cfg = Config {
        currency: "USD".to_string(),
        date_format: DateFormat::Dotted,
        load_mode: LoadMode::Lenient,
        records_file: Some(dir.path().join("records.csv")),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}
