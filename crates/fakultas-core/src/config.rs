use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "nilai_siswa_.db";
pub const DEFAULT_CONFIG_PATH: &str = "fakultas.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    db_path: Option<PathBuf>,
    log_level: Option<String>,
}

/// Reads `path` if given (it must exist), otherwise `fakultas.yaml` in the
/// working directory when present, otherwise defaults.
pub fn load_or_default(path: Option<&Path>, strict: bool) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => load_config(p, strict),
        None => {
            let p = Path::new(DEFAULT_CONFIG_PATH);
            if p.exists() {
                load_config(p, strict)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

pub fn load_config(path: &Path, strict: bool) -> Result<AppConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let mut cfg = AppConfig::default();
    if raw.trim().is_empty() {
        return Ok(cfg);
    }

    let mut ignored_keys = BTreeSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);
    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        ignored_keys.insert(p.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML {}: {}", path.display(), e)))?;

    if !ignored_keys.is_empty() {
        if strict {
            return Err(ConfigError(format!(
                "unknown fields in {}: {:?}",
                path.display(),
                ignored_keys
            )));
        }
        // Logging is not installed yet when the config is read.
        eprintln!(
            "WARN: ignored unknown config fields in {}: {:?}",
            path.display(),
            ignored_keys
        );
    }

    if let Some(db) = file.db_path {
        cfg.db_path = resolve_relative(path, db);
    }
    if let Some(level) = file.log_level {
        cfg.log_level = level;
    }
    Ok(cfg)
}

/// Relative paths in a config file are relative to the file itself.
fn resolve_relative(config_path: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        return p;
    }
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(p),
        _ => p,
    }
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        format!(
            "# fakultas configuration\ndb_path: {DEFAULT_DB_PATH}\nlog_level: {DEFAULT_LOG_LEVEL}\n"
        ),
    )
    .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
