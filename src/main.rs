//! vcpkg-cache-clean - remove unused vcpkg binary cache archives
//!
//! CLI entry point.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vcpkg_cache_clean::cli::Cli;
use vcpkg_cache_clean::config::{Config, ConfigManager, LogFormat};
use vcpkg_cache_clean::error::CleanResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CleanResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => Some(ConfigManager::with_path(path.clone())),
        None if cli.no_config => None,
        None => Some(ConfigManager::new()),
    };
    let config = match config_manager {
        Some(ref manager) => manager.load()?,
        None => Config::default(),
    };

    init_logging(cli.verbose, config.general.log_format);
    if let Some(ref manager) = config_manager {
        debug!("Config path: {}", manager.path().display());
    }

    vcpkg_cache_clean::cli::execute(&cli, &config)
}

/// 0 = warn, 1 = info, 2+ = debug. Logs go to stderr; stdout carries the report.
fn init_logging(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("vcpkg_cache_clean=warn"),
        1 => EnvFilter::new("vcpkg_cache_clean=info"),
        _ => EnvFilter::new("vcpkg_cache_clean=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
