//! Command to show the resolved form of paths.

use crate::error::CliError;
use crate::utils::{build_checker, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Show the absolute, normalized form the containment check uses.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut checker = build_checker(global)?;

        for path in &self.paths {
            println!("{}", checker.resolve(path).display());
        }

        let stats = checker.cache().stats();
        log::debug!(
            "resolved {} paths ({} cached, {} hits, {} misses)",
            self.paths.len(),
            checker.cache().len(),
            stats.hits,
            stats.misses
        );
        Ok(())
    }
}
