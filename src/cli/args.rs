//! CLI argument definitions using clap derive

use crate::error::{CleanError, CleanResult};
use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;

/// Remove vcpkg binary cache archives that no installed package uses
///
/// Reads the installed package ABIs from `<INSTALL_PATH>/vcpkg/status` and
/// deletes every `<abi>.zip` under the binary cache whose ABI is not
/// installed, then removes directories left empty.
#[derive(Parser, Debug)]
#[command(name = "vcpkg-cache-clean")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "vcpkg-cache-clean [OPTIONS] [INSTALL_PATH] <BINARY_CACHE_PATH>")]
pub struct Cli {
    /// [INSTALL_PATH] <BINARY_CACHE_PATH>. INSTALL_PATH is the vcpkg install
    /// directory and defaults to the current directory.
    #[arg(required = true, num_args = 1..=2, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Show what would be removed without making any changes
    #[arg(long)]
    pub dry_run: bool,

    /// Report archives that cannot be deleted and continue
    #[arg(long)]
    pub keep_going: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading the default configuration file
    #[arg(long)]
    pub no_config: bool,
}

/// Resolved input locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// vcpkg install root holding the status file
    pub install_path: PathBuf,
    /// Binary cache root
    pub binary_cache_path: PathBuf,
}

impl Cli {
    /// Resolve the install and cache paths. A single path is the binary cache;
    /// the install root then defaults to the current directory.
    pub fn locations(&self) -> CleanResult<Locations> {
        match self.paths.as_slice() {
            [install, cache] => Ok(Locations {
                install_path: install.clone(),
                binary_cache_path: cache.clone(),
            }),
            [cache] => Ok(Locations {
                install_path: env::current_dir()
                    .map_err(|e| CleanError::io("getting current directory", e))?,
                binary_cache_path: cache.clone(),
            }),
            _ => Err(CleanError::Usage(
                "expected [INSTALL_PATH] <BINARY_CACHE_PATH>".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_both_paths() {
        let cli = Cli::parse_from(["vcpkg-cache-clean", "/opt/vcpkg/installed", "/cache"]);
        let locations = cli.locations().unwrap();
        assert_eq!(locations.install_path, PathBuf::from("/opt/vcpkg/installed"));
        assert_eq!(locations.binary_cache_path, PathBuf::from("/cache"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn cli_single_path_is_cache() {
        let cli = Cli::parse_from(["vcpkg-cache-clean", "/cache"]);
        let locations = cli.locations().unwrap();
        assert_eq!(locations.binary_cache_path, PathBuf::from("/cache"));
        assert_eq!(locations.install_path, env::current_dir().unwrap());
    }

    #[test]
    fn cli_requires_a_path() {
        assert!(Cli::try_parse_from(["vcpkg-cache-clean"]).is_err());
        assert!(Cli::try_parse_from(["vcpkg-cache-clean", "a", "b", "c"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["vcpkg-cache-clean", "--dry-run", "--keep-going", "a", "b"]);
        assert!(cli.dry_run);
        assert!(cli.keep_going);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn cli_config_conflicts_with_no_config() {
        let result = Cli::try_parse_from([
            "vcpkg-cache-clean",
            "--config",
            "c.toml",
            "--no-config",
            "/cache",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["vcpkg-cache-clean", "/cache"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["vcpkg-cache-clean", "-v", "/cache"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["vcpkg-cache-clean", "-vv", "/cache"]);
        assert_eq!(cli.verbose, 2);
    }
}
