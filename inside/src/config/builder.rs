//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builder for assembling configuration from every source.
///
/// Sources are applied lowest to highest: built-in defaults, the user config,
/// an explicit config file, `INSIDE_*` environment variables, and finally
/// programmatic overrides. The merged result is validated before it is
/// returned.
///
/// # Examples
///
/// ```
/// use inside::config::{CacheConfig, Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         cache: Some(CacheConfig { capacity: Some(16), eviction: None }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cache_capacity(), 16);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that consults every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an explicit configuration file on top of the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignore all configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `INSIDE_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    ///
    /// Calling this more than once merges the overrides in call order.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match self.overrides {
            Some(ref mut existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let sources: Vec<ConfigSource> = if self.skip_files {
            Vec::new()
        } else {
            ConfigLoader::load_all(self.config_file.as_deref())?
        };

        for source in &sources {
            log::debug!(
                "config source {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
