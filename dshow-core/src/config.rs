//! Runtime configuration
//!
//! Loaded from `$DSHOW_INTEROP_CONFIG` when set, otherwise from
//! `<config dir>/dshow-interop/config.json`. A missing file means defaults.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "DSHOW_INTEROP_CONFIG";

/// How `Catalog::resolve` reports deprecated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeprecationPolicy {
    /// Warn on every resolution.
    Warn,
    /// Warn the first time each name is resolved.
    #[default]
    WarnOnce,
    /// Never warn.
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteropConfig {
    pub deprecation: DeprecationPolicy,
    /// Emit a debug event whenever a forwarded call returns a failure code.
    pub log_native_failures: bool,
}

impl Default for InteropConfig {
    fn default() -> Self {
        Self {
            deprecation: DeprecationPolicy::WarnOnce,
            log_native_failures: true,
        }
    }
}

impl InteropConfig {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, content).map_err(io_err)
    }
}

pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dshow-interop");
    path.push("config.json");
    path
}

static CONFIG: Lazy<RwLock<InteropConfig>> = Lazy::new(|| {
    let config = InteropConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{}; using defaults", e);
        InteropConfig::default()
    });
    RwLock::new(config)
});

/// Current process-wide configuration.
pub fn config() -> InteropConfig {
    CONFIG.read().clone()
}

pub fn set_config(config: InteropConfig) {
    *CONFIG.write() = config;
}
