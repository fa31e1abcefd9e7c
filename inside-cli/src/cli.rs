//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BenchCommand, CheckCommand, CompletionsCommand, RelationCommand, ResolveCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for checking whether one path lies inside another.
#[derive(Parser)]
#[command(name = "inside")]
#[command(version, about = "Check whether one path lies strictly inside another", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "PATH", global = true, env = "INSIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve relative paths against this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Maximum number of cached path resolutions
    #[arg(long, value_name = "N", global = true)]
    pub cache_capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Collect the global flags.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            config: self.config.clone(),
            base_dir: self.base_dir.clone(),
            cache_capacity: self.cache_capacity,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check whether a path is strictly inside another
    Check(CheckCommand),

    /// Show the resolved form of paths
    Resolve(ResolveCommand),

    /// Describe how two paths relate
    Relation(RelationCommand),

    /// Benchmark containment checks
    Bench(BenchCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
