//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{CacheConfig, Config};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use inside::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { base_dir: Some(PathBuf::from("/low")), ..Default::default() };
/// let high = Config { base_dir: Some(PathBuf::from("/high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_dir, Some(PathBuf::from("/high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`. Fields set in `source` win; nested cache
    /// settings merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }

        if let Some(ref source_cache) = source.cache {
            let merged = match target.cache {
                Some(ref target_cache) => Self::merge_cache(target_cache, source_cache),
                None => source_cache.clone(),
            };
            target.cache = Some(merged);
        }
    }

    fn merge_cache(target: &CacheConfig, source: &CacheConfig) -> CacheConfig {
        CacheConfig {
            capacity: source.capacity.or(target.capacity),
            eviction: source.eviction.or(target.eviction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::EvictionPolicy;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_overwrites() {
        let sources = vec![
            make_source(
                1,
                Config {
                    base_dir: Some(PathBuf::from("/low")),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    base_dir: Some(PathBuf::from("/high")),
                    ..Default::default()
                },
            ),
        ];
        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.base_dir, Some(PathBuf::from("/high")));
    }

    #[test]
    fn test_merge_cache_field_by_field() {
        let mut target = Config {
            cache: Some(CacheConfig {
                capacity: Some(10),
                eviction: Some(EvictionPolicy::Lru),
            }),
            ..Default::default()
        };
        let source = Config {
            cache: Some(CacheConfig {
                capacity: Some(20),
                eviction: None,
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.cache_capacity(), 20);
        assert_eq!(target.eviction_policy(), EvictionPolicy::Lru);
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            base_dir: Some(PathBuf::from("/keep")),
            cache: Some(CacheConfig {
                capacity: Some(3),
                eviction: None,
            }),
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.base_dir, Some(PathBuf::from("/keep")));
        assert_eq!(target.cache_capacity(), 3);
    }

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
