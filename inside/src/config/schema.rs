//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::path::{EvictionPolicy, DEFAULT_CAPACITY};

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered on top of
/// each other. Unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use inside::config::{CacheConfig, Config};
/// use inside::path::EvictionPolicy;
///
/// let config: Config = serde_yaml::from_str(
///     "base_dir: /srv/app\ncache:\n  capacity: 64\n  eviction: lru\n",
/// ).unwrap();
/// assert_eq!(config.cache_capacity(), 64);
/// assert_eq!(config.eviction_policy(), EvictionPolicy::Lru);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory relative paths are resolved against. Defaults to the
    /// working directory.
    pub base_dir: Option<PathBuf>,

    /// Resolution cache settings.
    pub cache: Option<CacheConfig>,
}

/// Resolution cache settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Maximum number of cached resolutions.
    pub capacity: Option<usize>,

    /// Which entry to evict when the cache is full.
    pub eviction: Option<EvictionPolicy>,
}

impl Config {
    /// Effective cache capacity.
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|c| c.capacity)
            .unwrap_or(DEFAULT_CAPACITY)
    }

    /// Effective eviction policy.
    #[must_use]
    pub fn eviction_policy(&self) -> EvictionPolicy {
        self.cache
            .as_ref()
            .and_then(|c| c.eviction)
            .unwrap_or_default()
    }
}
