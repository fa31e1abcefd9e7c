//! Command to describe how two paths relate.

use crate::error::CliError;
use crate::utils::{build_checker, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Describe how FIRST relates to SECOND.
#[derive(Args)]
pub struct RelationCommand {
    /// First path
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second path
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Print only the relationship name
    #[arg(long)]
    pub short: bool,
}

impl RelationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut checker = build_checker(global)?;
        let relationship = checker.relationship(&self.first, &self.second);

        if self.short {
            println!("{relationship}");
        } else {
            println!("{}", relationship.description(&self.first, &self.second));
        }
        Ok(())
    }
}
