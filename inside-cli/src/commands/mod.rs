//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Check whether one path is strictly inside another
//! - `resolve`: Show the resolved form of paths
//! - `relation`: Describe how two paths relate
//! - `bench`: Measure containment checks across common scenarios
//! - `completions`: Generate shell completion scripts

pub mod bench;
pub mod check;
pub mod completions;
pub mod relation;
pub mod resolve;

pub use bench::BenchCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use relation::RelationCommand;
pub use resolve::ResolveCommand;
