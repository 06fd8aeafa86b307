use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const MAX_BREAK_SECONDS: u32 = 600;

/// Application configuration stored in JSON.
///
/// Only tunables live here. Running state and the chosen interval are not
/// stored; every launch starts stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Length of each break countdown
    pub break_seconds: u32,
    /// Alpha of the black overlay background
    pub overlay_opacity: f64,
    /// tracing-subscriber filter directive, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            break_seconds: 10,
            overlay_opacity: 0.8,
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        self.break_seconds = self.break_seconds.clamp(1, MAX_BREAK_SECONDS);
        self.overlay_opacity = if self.overlay_opacity.is_finite() {
            self.overlay_opacity.clamp(0.0, 1.0)
        } else {
            AppConfig::default().overlay_opacity
        };
        if self.log_filter.trim().is_empty() {
            self.log_filter = AppConfig::default().log_filter;
        }
        self
    }
}

pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("LookAway").join("config.json")
}

/// Load the user config, writing defaults on first launch.
///
/// Callers fall back to `AppConfig::default()` on error; a broken file must
/// never keep the app from starting.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_or_init(&config_path())
}

/// Read `path`, or write and return the defaults when it does not exist yet.
pub fn load_or_init(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = AppConfig::default();
        save_to(path, &cfg)?;
        Ok(cfg)
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: AppConfig = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cfg.sanitized())
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let data = serde_json::to_string_pretty(config)?;
    fs::write(path, data).map_err(io_err)
}
