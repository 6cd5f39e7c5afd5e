//! Clean command - reconcile the binary cache with installed packages

use crate::cache::{clean_cache, CleanOptions};
use crate::cli::args::Cli;
use crate::config::Config;
use crate::error::{CleanError, CleanResult};
use crate::status::read_installed_packages;
use crate::ui;
use tracing::debug;

/// Execute the clean command
pub fn execute(cli: &Cli, config: &Config) -> CleanResult<()> {
    let locations = cli.locations()?;
    debug!(
        "Install path: {}, binary cache: {}",
        locations.install_path.display(),
        locations.binary_cache_path.display()
    );

    let packages = read_installed_packages(&locations.install_path, &config.status.file)?;
    ui::installed_packages(&packages);

    ui::processing(&locations.binary_cache_path);
    let options = CleanOptions::from_config(config)
        .with_dry_run(cli.dry_run)
        .with_keep_going(cli.keep_going);

    let installed = packages.abis();
    let outcome = clean_cache(&locations.binary_cache_path, &installed, &options)?;
    ui::summary(&outcome, options.dry_run);

    if !outcome.sweep.failed.is_empty() {
        return Err(CleanError::DeletionsFailed {
            count: outcome.sweep.failed.len(),
        });
    }

    Ok(())
}
