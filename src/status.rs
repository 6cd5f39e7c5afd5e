//! vcpkg status file parsing
//!
//! The status file lives under the install root (by default at
//! `<install_path>/vcpkg/status`) and records one paragraph per installed
//! package. Only the `Package:` and `Abi:` fields matter here; the ABI hash is
//! the same string vcpkg uses to name archives in the binary cache.

use crate::error::{CleanError, CleanResult};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PACKAGE_PREFIX: &str = "Package: ";
const ABI_PREFIX: &str = "Abi: ";

/// Installed packages and their ABI hashes, in status file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl InstalledPackages {
    /// Create an empty package list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the ABI for a package. A repeated package keeps its original
    /// position and takes the newer ABI.
    pub fn insert(&mut self, name: impl Into<String>, abi: impl Into<String>) {
        let name = name.into();
        let abi = abi.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = abi,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, abi));
            }
        }
    }

    /// Number of distinct packages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// ABI recorded for a package
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&pos| self.entries[pos].1.as_str())
    }

    /// Iterate `(package, abi)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a.as_str()))
    }

    /// The set of installed ABI hashes
    pub fn abis(&self) -> HashSet<&str> {
        self.entries.iter().map(|(_, abi)| abi.as_str()).collect()
    }

    /// Check whether any installed package has the given ABI
    pub fn contains_abi(&self, abi: &str) -> bool {
        self.entries.iter().any(|(_, a)| a == abi)
    }
}

/// Path of the status file for an install root
pub fn status_file_path(install_path: &Path, relative: &Path) -> PathBuf {
    install_path.join(relative)
}

/// Read the status file under `install_path` and collect installed ABIs
pub fn read_installed_packages(
    install_path: &Path,
    relative: &Path,
) -> CleanResult<InstalledPackages> {
    let path = status_file_path(install_path, relative);
    if !path.exists() {
        return Err(CleanError::StatusFileNotFound(path));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CleanError::io(format!("reading status file {}", path.display()), e))?;

    let packages = parse_status(&content, &path)?;
    debug!(
        "Parsed {} installed package(s) from {}",
        packages.len(),
        path.display()
    );
    Ok(packages)
}

/// Parse status file contents. `source` is only used in error messages.
pub fn parse_status(content: &str, source: &Path) -> CleanResult<InstalledPackages> {
    let mut packages = InstalledPackages::new();
    let mut current: Option<&str> = None;

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(name) = line.strip_prefix(PACKAGE_PREFIX) {
            current = Some(name.trim());
        } else if let Some(abi) = line.strip_prefix(ABI_PREFIX) {
            let name = current.ok_or_else(|| CleanError::AbiWithoutPackage {
                path: source.to_path_buf(),
                line: idx + 1,
            })?;
            packages.insert(name, abi.trim());
        }
    }

    Ok(packages)
}
