//! Main entry point for the inside CLI.
//!
//! This is the command-line interface for the inside path containment
//! library. It provides commands for:
//! - `check`: Check whether one path is strictly inside another
//! - `resolve`: Show the resolved form of paths
//! - `relation`: Describe how two paths relate
//! - `bench`: Measure containment checks
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use inside_cli::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Fails only if a logger is already installed
    let _ = inside::init_logger(cli.verbose, cli.quiet).install();

    let global = cli.global_options();

    let result = match cli.command {
        Command::Check(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Relation(cmd) => cmd.execute(&global),
        Command::Bench(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && e.is_semantic()) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
