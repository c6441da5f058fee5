use fakultas_core::config::{load_config, load_or_default, write_sample_config, AppConfig};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn sample_config_loads_back_as_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fakultas.yaml");
    write_sample_config(&path).unwrap();

    let cfg = load_config(&path, true).unwrap();
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.db_path, dir.path().join("nilai_siswa_.db"));
}

#[test]
fn unknown_keys_fail_only_in_strict_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fakultas.yaml");
    std::fs::write(&path, "db_path: /tmp/a.db\ntheme: dark\n").unwrap();

    let err = load_config(&path, true).unwrap_err();
    assert!(err.to_string().contains("theme"), "{err}");

    let cfg = load_config(&path, false).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/a.db"));
}

#[test]
fn empty_file_means_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    std::fs::write(&path, "\n").unwrap();
    assert_eq!(load_config(&path, true).unwrap(), AppConfig::default());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    let err = load_or_default(Some(&path), false).unwrap_err();
    assert!(err.to_string().starts_with("config error: failed to read config"));
}

#[test]
fn malformed_yaml_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "db_path: [unclosed\n").unwrap();
    let err = load_config(&path, false).unwrap_err();
    assert!(err.to_string().contains("failed to parse YAML"), "{err}");
}
