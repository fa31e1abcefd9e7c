//! Library exports for inside-cli.
//!
//! This module exports the CLI structure for use by the benches and tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
