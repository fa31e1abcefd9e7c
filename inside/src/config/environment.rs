//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `INSIDE_BASE_DIR`: base directory for relative paths
//! - `INSIDE_CACHE_CAPACITY`: maximum number of cached resolutions
//! - `INSIDE_EVICTION`: `fifo` or `lru`

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::EvictionPolicy;
use std::env;
use std::path::PathBuf;

/// Base directory override.
pub const ENV_BASE_DIR: &str = "INSIDE_BASE_DIR";

/// Cache capacity override.
pub const ENV_CACHE_CAPACITY: &str = "INSIDE_CACHE_CAPACITY";

/// Eviction policy override.
pub const ENV_EVICTION: &str = "INSIDE_EVICTION";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use inside::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `INSIDE_*` environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(base) = env::var(ENV_BASE_DIR) {
            config.base_dir = Some(PathBuf::from(base));
        }

        if let Ok(capacity) = env::var(ENV_CACHE_CAPACITY) {
            let capacity = capacity.trim().parse().map_err(|_| Error::Validation {
                field: ENV_CACHE_CAPACITY.into(),
                message: "Must be a positive integer".into(),
            })?;
            config.cache.get_or_insert_with(Default::default).capacity = Some(capacity);
        }

        if let Ok(policy) = env::var(ENV_EVICTION) {
            let policy =
                EvictionPolicy::parse(policy.trim()).map_err(|message| Error::Validation {
                    field: ENV_EVICTION.into(),
                    message,
                })?;
            config.cache.get_or_insert_with(Default::default).eviction = Some(policy);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_BASE_DIR);
        env::remove_var(ENV_CACHE_CAPACITY);
        env::remove_var(ENV_EVICTION);
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(ENV_BASE_DIR, "/from/env");
        env::set_var(ENV_CACHE_CAPACITY, " 42 ");
        env::set_var(ENV_EVICTION, "LRU");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.base_dir, Some(PathBuf::from("/from/env")));
        assert_eq!(config.cache_capacity(), 42);
        assert_eq!(config.eviction_policy(), EvictionPolicy::Lru);
    }

    #[test]
    #[serial]
    fn test_invalid_capacity() {
        clear_env();
        env::set_var(ENV_CACHE_CAPACITY, "lots");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == ENV_CACHE_CAPACITY));
    }

    #[test]
    #[serial]
    fn test_invalid_policy() {
        clear_env();
        env::set_var(ENV_EVICTION, "random");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        assert!(result.is_err());
    }
}
