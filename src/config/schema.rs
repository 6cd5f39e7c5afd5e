//! Configuration schema for vcpkg-cache-clean
//!
//! Configuration is read from `~/.config/vcpkg-cache-clean/config.toml`
//! when present. Every field has a default, so the file is optional.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Status file settings
    pub status: StatusConfig,

    /// Binary cache settings
    pub cache: CacheConfig,

    /// Cleanup behaviour
    pub clean: CleanConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: LogFormat,
}

/// Status file location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Status file path relative to the install root
    pub file: PathBuf,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("vcpkg").join("status"),
        }
    }
}

/// Binary cache layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Archive file extension, without the leading dot
    pub extension: String,
}

impl CacheConfig {
    /// Extension with any leading dot stripped
    pub fn archive_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            extension: "zip".to_string(),
        }
    }
}

/// Cleanup behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Report failed deletions and continue instead of aborting
    pub keep_going: bool,

    /// Remove directories left without archives
    pub prune_empty_dirs: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            keep_going: false,
            prune_empty_dirs: true,
        }
    }
}
