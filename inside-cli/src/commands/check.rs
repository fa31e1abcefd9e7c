//! Command to check whether one path is inside another.

use crate::error::CliError;
use crate::utils::{build_checker, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Check whether CHILD lies strictly inside PARENT.
#[derive(Args)]
pub struct CheckCommand {
    /// Path that may lie inside PARENT
    #[arg(value_name = "CHILD")]
    pub child: PathBuf,

    /// Candidate containing path
    #[arg(value_name = "PARENT")]
    pub parent: PathBuf,

    /// Invert the check (fail if CHILD is inside PARENT)
    #[arg(long)]
    pub not: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut checker = build_checker(global)?;
        let inside = checker.is_inside(&self.child, &self.parent);

        if !global.quiet {
            println!("{inside}");
        }

        if inside != self.not {
            return Ok(());
        }

        let msg = if self.not {
            format!(
                "{} is inside {}",
                self.child.display(),
                self.parent.display()
            )
        } else {
            format!(
                "{} is not inside {}",
                self.child.display(),
                self.parent.display()
            )
        };
        Err(CliError::SemanticFailure(msg))
    }
}
