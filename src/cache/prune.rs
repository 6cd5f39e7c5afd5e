//! Empty directory pruning

use crate::ui;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn depth(path: &Path) -> usize {
    path.components().count()
}

/// Directories that lost an archive and kept none, deepest first.
/// The cache root itself is never a candidate.
pub fn prune_candidates(
    removed_dirs: &HashSet<PathBuf>,
    kept_dirs: &HashSet<PathBuf>,
    root: &Path,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = removed_dirs
        .difference(kept_dirs)
        .filter(|dir| dir.as_path() != root)
        .cloned()
        .collect();

    candidates.sort_by(|a, b| depth(b).cmp(&depth(a)).then_with(|| a.cmp(b)));
    candidates
}

/// Remove each candidate directory if it is empty. Returns how many were
/// removed; failures (not empty, already gone) are skipped.
pub fn prune_empty_dirs(candidates: &[PathBuf], dry_run: bool) -> usize {
    let mut pruned = 0;

    for dir in candidates {
        ui::removing_dir(dir, dry_run);
        if dry_run {
            continue;
        }

        match fs::remove_dir(dir) {
            Ok(()) => pruned += 1,
            Err(e) => debug!("Leaving directory {}: {}", dir.display(), e),
        }
    }

    pruned
}
