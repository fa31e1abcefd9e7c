//! Bounded memoization of path resolution.
//!
//! Repeated containment checks tend to reuse a handful of paths (many files
//! checked against one root), so the resolved form of each relative input is
//! kept in a [`ResolveCache`]. Entries are keyed by the input path exactly as
//! given.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default maximum number of cached resolutions.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Which entry to drop when the cache is full.
///
/// # Examples
///
/// ```
/// use inside::path::EvictionPolicy;
///
/// assert_eq!(EvictionPolicy::default(), EvictionPolicy::Fifo);
/// assert_eq!(EvictionPolicy::parse("LRU").unwrap(), EvictionPolicy::Lru);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Evict the entry inserted earliest. Reads do not affect the order.
    #[default]
    Fifo,

    /// Evict the entry inserted or read least recently.
    Lru,
}

impl EvictionPolicy {
    /// Parses a policy name (`fifo` or `lru`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            _ => Err(format!("invalid eviction policy: {s}")),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Lru => write!(f, "lru"),
        }
    }
}

/// Hit, miss and eviction counters for a [`ResolveCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to resolve the path.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
}

impl CacheStats {
    /// Total number of lookups.
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups answered from the cache, `0.0` when there were none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// A bounded map from input path to resolved path.
///
/// The cache never holds more than [`capacity`](Self::capacity) entries. When
/// a miss arrives while the cache is full, exactly one entry is evicted
/// according to the [`EvictionPolicy`] before the new one is inserted.
///
/// # Examples
///
/// ```
/// use inside::path::ResolveCache;
/// use std::path::{Path, PathBuf};
///
/// let mut cache = ResolveCache::with_capacity(2).unwrap();
/// let resolve = |p: &Path| PathBuf::from("/base").join(p);
///
/// assert_eq!(cache.get_or_resolve(Path::new("a"), resolve), PathBuf::from("/base/a"));
/// cache.get_or_resolve(Path::new("b"), resolve);
/// cache.get_or_resolve(Path::new("c"), resolve);
///
/// // "a" was inserted first, so it went first
/// assert!(!cache.contains(Path::new("a")));
/// assert_eq!(cache.len(), 2);
/// assert_eq!(cache.stats().evictions, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResolveCache {
    entries: IndexMap<PathBuf, PathBuf>,
    capacity: usize,
    policy: EvictionPolicy,
    stats: CacheStats,
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self {
            entries: IndexMap::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            policy: EvictionPolicy::Fifo,
            stats: CacheStats::default(),
        }
    }
}

impl ResolveCache {
    /// Create a FIFO cache holding up to [`DEFAULT_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FIFO cache with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_policy(capacity, EvictionPolicy::Fifo)
    }

    /// Create a cache with the given capacity and eviction policy.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `capacity` is zero.
    pub fn with_policy(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::Validation {
                field: "cache.capacity".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(Self {
            entries: IndexMap::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            policy,
            stats: CacheStats::default(),
        })
    }

    /// Return the cached resolution of `path`, computing it with `resolve` on
    /// a miss.
    ///
    /// `resolve` is only called on a miss.
    pub fn get_or_resolve<F>(&mut self, path: &Path, resolve: F) -> PathBuf
    where
        F: FnOnce(&Path) -> PathBuf,
    {
        match self.policy {
            EvictionPolicy::Fifo => {
                if let Some(resolved) = self.entries.get(path) {
                    self.stats.hits += 1;
                    log::trace!("resolve cache hit: {}", path.display());
                    return resolved.clone();
                }
            }
            EvictionPolicy::Lru => {
                if let Some((key, resolved)) = self.entries.shift_remove_entry(path) {
                    self.stats.hits += 1;
                    log::trace!("resolve cache hit: {}", path.display());
                    self.entries.insert(key, resolved.clone());
                    return resolved;
                }
            }
        }

        self.stats.misses += 1;
        let resolved = resolve(path);
        log::debug!(
            "resolve cache miss: {} -> {}",
            path.display(),
            resolved.display()
        );

        if self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                self.stats.evictions += 1;
                log::debug!("resolve cache evicted: {}", evicted.display());
            }
        }

        self.entries.insert(path.to_path_buf(), resolved.clone());
        resolved
    }

    /// Look up a cached resolution without counting it or touching the order.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Path> {
        self.entries.get(path).map(PathBuf::as_path)
    }

    /// Whether `path` currently has a cached resolution.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Cached input paths, next to be evicted first.
    pub fn keys(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Eviction policy in use.
    #[must_use]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Counters accumulated since creation.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
