use aethon::config::Config;
use std::fs;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.api.base_url = "http://localhost:8123".to_string();
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.api.base_url, "http://localhost:8123");
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    // Empty base URL
    cfg.api.base_url.clear();
    assert!(cfg.validate().is_err());

    // Non-http scheme
    cfg = Config::default();
    cfg.api.base_url = "ftp://monitoringapi.solaredge.com".to_string();
    assert!(cfg.validate().is_err());

    // Zero timeout
    cfg = Config::default();
    cfg.api.timeout_seconds = 0;
    assert!(cfg.validate().is_err());

    // Zero rotation count
    cfg = Config::default();
    cfg.logging.backup_count = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}

#[test]
fn from_missing_file_is_io_error() {
    let err = Config::from_file("/definitely/not/here.yaml").unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("I/O error"));
}
