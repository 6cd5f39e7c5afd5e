//! Error types for vcpkg-cache-clean
//!
//! All modules use `CleanResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cache cleaning operations
pub type CleanResult<T> = Result<T, CleanError>;

/// All errors that can occur while cleaning a binary cache
#[derive(Error, Debug)]
pub enum CleanError {
    // Status file errors
    #[error("Status file not found at {0}")]
    StatusFileNotFound(PathBuf),

    #[error("Malformed status file {path}: line {line} has an Abi entry before any Package entry")]
    AbiWithoutPackage { path: PathBuf, line: usize },

    // Cache errors
    #[error("Binary cache directory '{0}' does not exist")]
    CacheDirNotFound(PathBuf),

    #[error("Invalid path: {path}: {reason}")]
    PathInvalid { path: PathBuf, reason: String },

    #[error("Failed to walk binary cache {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{count} cache archive(s) could not be removed")]
    DeletionsFailed { count: usize },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // General errors
    #[error("{0}")]
    Usage(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::StatusFileNotFound(_) => {
                Some("Pass the vcpkg install root (the directory containing vcpkg/status) as the first argument")
            }
            Self::CacheDirNotFound(_) => Some("Check the binary cache path, e.g. $VCPKG_DEFAULT_BINARY_CACHE"),
            Self::DeletionsFailed { .. } => Some("Check permissions on the cache directory and re-run"),
            _ => None,
        }
    }
}
