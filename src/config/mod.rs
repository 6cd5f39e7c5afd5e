//! Configuration management for vcpkg-cache-clean

pub mod schema;

pub use schema::{CacheConfig, CleanConfig, Config, GeneralConfig, LogFormat, StatusConfig};

use crate::error::{CleanError, CleanResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration manager
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            explicit: false,
        }
    }

    /// Create a config manager with a custom path. The file must exist.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            explicit: true,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vcpkg-cache-clean")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults if the default file is absent
    pub fn load(&self) -> CleanResult<Config> {
        if !self.config_path.exists() {
            if self.explicit {
                return Err(CleanError::ConfigNotFound(self.config_path.clone()));
            }
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> CleanResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| CleanError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| CleanError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
