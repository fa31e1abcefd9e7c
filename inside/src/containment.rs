//! The containment predicate.
//!
//! [`ContainmentChecker`] answers "is this path strictly inside that one?"
//! for any pair of absolute or relative paths. It owns a [`PathResolver`] for
//! the path syntax rules and a [`ResolveCache`] so repeated relative inputs
//! are only resolved once.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::config::Config;
use crate::error::Result;
use crate::path::{
    normalize, relative, CacheStats, LexicalResolver, PathRelationship, PathResolver, ResolveCache,
};

/// Decides whether one path lies strictly inside another.
///
/// # Examples
///
/// ```
/// use inside::ContainmentChecker;
///
/// # #[cfg(unix)]
/// # {
/// let mut checker = ContainmentChecker::with_base("/home/user").unwrap();
///
/// assert!(checker.is_inside("a/b/c", "a"));
/// assert!(checker.is_inside("a/../b/c", "."));
/// assert!(!checker.is_inside("/a/b", "/a/b"));
/// assert!(!checker.is_inside("/x/y", "/a/b"));
/// assert!(!checker.is_inside("/a", "/a/b"));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContainmentChecker<R = LexicalResolver> {
    resolver: R,
    cache: ResolveCache,
}

impl ContainmentChecker<LexicalResolver> {
    /// Create a checker resolving relative paths against `base`, with a
    /// default cache.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not absolute.
    pub fn with_base(base: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(LexicalResolver::new(base)?, ResolveCache::new()))
    }

    /// Create a checker based at the process working directory, with a
    /// default cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(
            LexicalResolver::from_current_dir()?,
            ResolveCache::new(),
        ))
    }

    /// Create a checker from configuration.
    ///
    /// Uses the configured base directory (the working directory if unset),
    /// cache capacity and eviction policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory is invalid, the working
    /// directory cannot be read, or the cache capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = match &config.base_dir {
            Some(base) => LexicalResolver::new(base.clone())?,
            None => LexicalResolver::from_current_dir()?,
        };
        let cache = ResolveCache::with_policy(config.cache_capacity(), config.eviction_policy())?;
        log::debug!(
            "containment checker: base={}, cache capacity={}, policy={}",
            resolver.base().display(),
            cache.capacity(),
            cache.policy()
        );
        Ok(Self::new(resolver, cache))
    }
}

impl<R: PathResolver> ContainmentChecker<R> {
    /// Create a checker from a resolver and a cache.
    pub fn new(resolver: R, cache: ResolveCache) -> Self {
        Self { resolver, cache }
    }

    /// Resolve a path the way the predicate sees it.
    ///
    /// Absolute paths are normalized directly and bypass the cache. Relative
    /// paths go through the cache and the resolver.
    pub fn resolve(&mut self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if self.resolver.is_absolute(path) {
            return normalize::collapse(path);
        }
        let resolver = &self.resolver;
        self.cache.get_or_resolve(path, |p| resolver.resolve(p))
    }

    /// Check whether `child` resolves to a location strictly inside `parent`.
    ///
    /// Returns `false` when both resolve to the same location.
    pub fn is_inside(&mut self, child: impl AsRef<Path>, parent: impl AsRef<Path>) -> bool {
        let child = self.resolve(child);
        let parent = self.resolve(parent);
        self.is_resolved_inside(&child, &parent)
    }

    /// Classify how `first` relates to `second`.
    pub fn relationship(
        &mut self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
    ) -> PathRelationship {
        let first = self.resolve(first);
        let second = self.resolve(second);
        PathRelationship::classify(
            self.is_resolved_inside(&first, &second),
            self.is_resolved_inside(&second, &first),
            first == second,
        )
    }

    /// The resolver in use.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The resolution cache.
    pub fn cache(&self) -> &ResolveCache {
        &self.cache
    }

    /// Mutable access to the resolution cache.
    pub fn cache_mut(&mut self) -> &mut ResolveCache {
        &mut self.cache
    }

    fn is_resolved_inside(&self, child: &Path, parent: &Path) -> bool {
        if child == parent {
            return false;
        }

        // A strict descendant of a normalized path is always longer
        if child.as_os_str().len() <= parent.as_os_str().len() {
            return false;
        }

        let relation = self.resolver.relative(parent, child);

        // Equal to the child means there was no common root to walk from
        !relation.as_os_str().is_empty() && !relative::escapes(&relation) && relation != child
    }
}

/// A [`ContainmentChecker`] behind a mutex, usable from several threads.
///
/// The lookup, eviction and insert of a cache miss happen under one lock, so
/// the cache bound holds and no update is lost.
///
/// # Examples
///
/// ```
/// use inside::{ContainmentChecker, SharedChecker};
/// use std::sync::Arc;
/// use std::thread;
///
/// # #[cfg(unix)]
/// # {
/// let shared = Arc::new(SharedChecker::new(ContainmentChecker::with_base("/srv").unwrap()));
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.is_inside(format!("jobs/{i}"), "jobs"))
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap());
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct SharedChecker<R = LexicalResolver> {
    inner: Mutex<ContainmentChecker<R>>,
}

impl<R: PathResolver> SharedChecker<R> {
    /// Wrap a checker.
    pub fn new(checker: ContainmentChecker<R>) -> Self {
        Self {
            inner: Mutex::new(checker),
        }
    }

    /// See [`ContainmentChecker::is_inside`].
    pub fn is_inside(&self, child: impl AsRef<Path>, parent: impl AsRef<Path>) -> bool {
        self.lock().is_inside(child, parent)
    }

    /// See [`ContainmentChecker::resolve`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.lock().resolve(path)
    }

    /// Current cache entry count.
    pub fn cache_len(&self) -> usize {
        self.lock().cache().len()
    }

    /// Current cache counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().cache().stats()
    }

    /// Unwrap the checker.
    pub fn into_inner(self) -> ContainmentChecker<R> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContainmentChecker<R>> {
        // Cache state is valid between calls, poisoning is ignored
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

thread_local! {
    static DEFAULT_CHECKER: RefCell<Option<ContainmentChecker>> = const { RefCell::new(None) };
}

/// Check whether `child` is strictly inside `parent`.
///
/// Relative paths are resolved against the working directory as it was on
/// the first call from this thread. Each thread keeps its own checker with a
/// default cache.
///
/// # Errors
///
/// Returns an error only if the working directory cannot be read on the
/// first call.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// assert!(inside::is_path_inside("a/b/c", "a").unwrap());
/// assert!(!inside::is_path_inside("/a/b", "/a/b").unwrap());
/// # }
/// ```
pub fn is_path_inside(child: impl AsRef<Path>, parent: impl AsRef<Path>) -> Result<bool> {
    DEFAULT_CHECKER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(ContainmentChecker::from_current_dir()?);
        }
        Ok(slot
            .as_mut()
            .is_some_and(|checker| checker.is_inside(child, parent)))
    })
}
