//! Command-line interface

pub mod args;
pub mod clean;

pub use args::{Cli, Locations};
pub use clean::execute;
