//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across CLI commands: global
//! options, configuration loading, and checker construction.

use crate::error::CliError;
use inside::config::CacheConfig;
use inside::path::normalize;
use inside::{Config, ConfigBuilder, ContainmentChecker};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the base directory for relative paths.
    pub base_dir: Option<PathBuf>,

    /// Override the resolution cache capacity.
    pub cache_capacity: Option<usize>,
}

/// Make a user-supplied directory absolute against the working directory.
///
/// The result is normalized lexically; symlinks are not followed.
pub fn absolute_dir(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(normalize::collapse(path));
    }
    let cwd = normalize::current_base()?;
    Ok(normalize::resolve_against(&cwd, path))
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    let base_dir = global
        .base_dir
        .as_deref()
        .map(absolute_dir)
        .transpose()?;

    let overrides = Config {
        base_dir,
        cache: global.cache_capacity.map(|capacity| CacheConfig {
            capacity: Some(capacity),
            eviction: None,
        }),
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a containment checker from the layered configuration.
pub fn build_checker(global: &GlobalOptions) -> Result<ContainmentChecker, CliError> {
    let config = load_configuration(global)?;
    ContainmentChecker::from_config(&config).map_err(CliError::from)
}

/// Format an integer with thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
