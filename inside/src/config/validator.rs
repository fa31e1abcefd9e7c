//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use inside::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the cache capacity is zero or the base
    /// directory is not absolute.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base) = config.base_dir {
            if !base.is_absolute() {
                return Err(Error::Validation {
                    field: "base_dir".into(),
                    message: format!("must be an absolute path, got {}", base.display()),
                });
            }
        }

        if config.cache_capacity() == 0 {
            return Err(Error::Validation {
                field: "cache.capacity".into(),
                message: "must be at least 1".into(),
            });
        }

        Ok(())
    }
}
