use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "COHORTE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "COHORTE_API_TIMEOUT_SECS";

/// Backend connection settings. The bearer token is deliberately absent:
/// it belongs to the authentication layer and is never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Override fields from `lookup`, typically the process environment.
    /// Unparsable timeouts are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_SECS}"),
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }
}

fn config_dir() -> Result<PathBuf, ApiError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ApiError::Config("no config directory found".to_string()))?;
    Ok(base.join("cohorte"))
}

pub fn config_path() -> Result<PathBuf, ApiError> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from the default location, falling back to defaults
/// when no file exists, then apply environment overrides.
pub fn load_config() -> Result<ApiConfig, ApiError> {
    let path = config_path()?;
    let mut config = if path.exists() {
        load_config_from(&path)?
    } else {
        ApiConfig::default()
    };
    config.apply_env_overrides();
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<ApiConfig, ApiError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ApiError::Config(format!("failed to read config at {}: {e}", path.display())))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ApiError> {
    if from_version > CURRENT_VERSION {
        return Err(ApiError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 -> v1: unversioned files only need the version stamp
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ApiError::Config("config is not a JSON object".to_string()))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1 (stamped version)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &ApiConfig) -> Result<PathBuf, ApiError> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &ApiConfig, path: &Path) -> Result<(), ApiError> {
    let io_err = |e: std::io::Error| ApiError::Config(format!("{}: {e}", path.display()));

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
    std::fs::rename(&tmp_path, path).map_err(io_err)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
