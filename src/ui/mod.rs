//! Human-readable report output
//!
//! Everything the tool prints on stdout goes through here. Diagnostics use
//! `tracing` instead and land on stderr.

mod output;

pub use output::{
    deletion_failed, format_bytes, installed_packages, keeping, processing, removing,
    removing_dir, summary,
};
