//! vcpkg binary cache cleanup
//!
//! Archives in the binary cache are named `<abi>.<ext>` and may sit anywhere
//! under the cache root (vcpkg's default layout shards them by the first two
//! hex digits). An archive is stale when no installed package has its ABI.
//!
//! # Cleanup
//!
//! | Step | Effect |
//! |------|--------|
//! | sweep | delete stale archives, note parent dirs of kept and removed files |
//! | prune | `rmdir` dirs that lost an archive and kept none, deepest first |
//!
//! Under dry-run both steps only report.

pub mod prune;
pub mod sweep;

pub use prune::{prune_candidates, prune_empty_dirs};
pub use sweep::{archive_abi, sweep, SweepOutcome};

use crate::config::Config;
use crate::error::CleanResult;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Options controlling a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Archive extension, without the leading dot
    pub extension: String,
    /// Report only, never touch the filesystem
    pub dry_run: bool,
    /// Continue past failed deletions
    pub keep_going: bool,
    /// Remove directories left without archives
    pub prune_empty_dirs: bool,
}

impl CleanOptions {
    /// Options from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            extension: config.cache.archive_extension().to_string(),
            dry_run: false,
            keep_going: config.clean.keep_going,
            prune_empty_dirs: config.clean.prune_empty_dirs,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable keep-going; a config-enabled setting is never turned off here
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going |= keep_going;
        self
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of a full cleanup run
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub sweep: SweepOutcome,
    /// Directories actually removed (always 0 under dry-run)
    pub pruned_dirs: usize,
}

/// Sweep stale archives from `root`, then prune emptied directories
pub fn clean_cache(
    root: &Path,
    installed: &HashSet<&str>,
    options: &CleanOptions,
) -> CleanResult<CleanOutcome> {
    let swept = sweep(root, installed, options)?;

    let pruned_dirs = if options.prune_empty_dirs {
        let candidates = prune_candidates(&swept.removed_dirs, &swept.kept_dirs, root);
        prune_empty_dirs(&candidates, options.dry_run)
    } else {
        0
    };

    info!(
        "Cleaned {}: {} archive(s) removed, {} directories pruned",
        root.display(),
        swept.removed.len(),
        pruned_dirs
    );

    Ok(CleanOutcome {
        sweep: swept,
        pruned_dirs,
    })
}
