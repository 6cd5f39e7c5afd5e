//! Binary cache sweep
//!
//! Walks the cache tree, keeps archives named after an installed ABI and
//! deletes the rest, recording which directories saw each outcome.

use super::CleanOptions;
use crate::error::{CleanError, CleanResult};
use crate::ui;
use std::borrow::Cow;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// What a sweep did to the cache
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Archives left in place
    pub kept: Vec<PathBuf>,
    /// Archives deleted (or that would be deleted under dry-run)
    pub removed: Vec<PathBuf>,
    /// Archives whose deletion failed
    pub failed: Vec<PathBuf>,
    /// Total size of `removed`
    pub bytes_removed: u64,
    /// Directories holding at least one kept archive
    pub kept_dirs: HashSet<PathBuf>,
    /// Directories that lost at least one archive
    pub removed_dirs: HashSet<PathBuf>,
}

/// ABI named by an archive path, or `None` if the extension doesn't match
pub fn archive_abi<'a>(path: &'a Path, extension: &str) -> Option<Cow<'a, str>> {
    if path.extension() != Some(OsStr::new(extension)) {
        return None;
    }
    path.file_stem().map(OsStr::to_string_lossy)
}

/// Walk `root` and delete every archive whose ABI is not in `installed`
pub fn sweep(
    root: &Path,
    installed: &HashSet<&str>,
    options: &CleanOptions,
) -> CleanResult<SweepOutcome> {
    if !root.exists() {
        return Err(CleanError::CacheDirNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CleanError::PathInvalid {
            path: root.to_path_buf(),
            reason: "binary cache path is not a directory".to_string(),
        });
    }

    let mut outcome = SweepOutcome::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if options.keep_going => {
                warn!("Skipping unreadable cache entry: {}", err);
                continue;
            }
            Err(err) => {
                return Err(CleanError::Walk {
                    root: root.to_path_buf(),
                    source: err,
                })
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let keep = match archive_abi(entry.path(), &options.extension) {
            Some(abi) => installed.contains(abi.as_ref()),
            None => continue,
        };
        let parent = entry
            .path()
            .parent()
            .map_or_else(|| root.to_path_buf(), Path::to_path_buf);

        if keep {
            ui::keeping(entry.path());
            outcome.kept_dirs.insert(parent);
            outcome.kept.push(entry.into_path());
            continue;
        }

        ui::removing(entry.path(), options.dry_run);
        outcome.removed_dirs.insert(parent);
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        if !options.dry_run {
            if let Err(err) = fs::remove_file(entry.path()) {
                if !options.keep_going {
                    return Err(CleanError::io(
                        format!("removing {}", entry.path().display()),
                        err,
                    ));
                }
                ui::deletion_failed(entry.path(), &err);
                outcome.failed.push(entry.into_path());
                continue;
            }
        }

        outcome.bytes_removed += size;
        outcome.removed.push(entry.into_path());
    }

    debug!(
        "Swept {}: {} kept, {} removed, {} failed",
        root.display(),
        outcome.kept.len(),
        outcome.removed.len(),
        outcome.failed.len()
    );
    Ok(outcome)
}
