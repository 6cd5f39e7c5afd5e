//! Output functions for consistent CLI formatting
//!
//! Report lines go to stdout; per-file failures go to stderr. `console`
//! drops the styling when the stream is not a terminal, so piped output is
//! plain text.

use crate::cache::CleanOutcome;
use crate::status::InstalledPackages;
use console::style;
use std::io;
use std::path::Path;

/// Format bytes as human-readable size (e.g., "1.5 GB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Print the installed package/ABI table
pub fn installed_packages(packages: &InstalledPackages) {
    println!();
    println!("{}", style("Installed package ABIs:").bold());
    for (name, abi) in packages.iter() {
        println!("{}: {}", name, style(abi).dim());
    }
    println!();
}

/// Announce the cache root being processed
pub fn processing(cache_path: &Path) {
    println!("Processing binary cache directory: {}", cache_path.display());
}

/// An archive that belongs to an installed package
pub fn keeping(path: &Path) {
    println!("{} {}", style("Keeping").green(), path.display());
}

/// An archive selected for removal
pub fn removing(path: &Path, dry_run: bool) {
    if dry_run {
        println!("{} {}", style("Would remove").yellow(), path.display());
    } else {
        println!("{} {}", style("Removing").red(), path.display());
    }
}

/// A directory selected for pruning
pub fn removing_dir(dir: &Path, dry_run: bool) {
    if dry_run {
        println!(
            "{} {}",
            style("Would remove empty directory:").yellow(),
            dir.display()
        );
    } else {
        println!(
            "{} {}",
            style("Removing empty directory:").red(),
            dir.display()
        );
    }
}

/// An archive that could not be deleted
pub fn deletion_failed(path: &Path, err: &io::Error) {
    eprintln!(
        "{} could not remove {}: {}",
        style("[FAIL]").red(),
        path.display(),
        err
    );
}

/// Summary line after a run
pub fn summary(outcome: &CleanOutcome, dry_run: bool) {
    println!();
    println!("{}", summary_line(outcome, dry_run));
}

fn summary_line(outcome: &CleanOutcome, dry_run: bool) -> String {
    let removed = outcome.sweep.removed.len();
    let kept = outcome.sweep.kept.len();
    let size = format_bytes(outcome.sweep.bytes_removed);

    if dry_run {
        format!("Dry run: would remove {removed} archive(s) ({size}), keeping {kept}")
    } else {
        format!(
            "Kept {kept} archive(s), removed {removed} archive(s) ({size}), pruned {} directories",
            outcome.pruned_dirs
        )
    }
}
