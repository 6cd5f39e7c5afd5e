//! vcpkg-cache-clean - vcpkg binary cache cleanup
//!
//! Deletes binary cache archives whose ABI hash does not belong to any
//! package recorded in the vcpkg status file.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod status;
pub mod ui;

pub use error::{CleanError, CleanResult};
