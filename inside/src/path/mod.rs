//! Path resolution, caching, and relationship checking.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! Resolution converts a path to an absolute, normalized form by:
//! - Joining relative paths onto a base directory
//! - Resolving `.` and `..` components (clamping at the root)
//! - Dropping redundant and trailing separators
//!
//! Resolution is lexical. The filesystem is never consulted, so symlinks are
//! not followed and paths do not need to exist.
//!
//! ## Caching
//!
//! Relative inputs are memoized in a bounded [`ResolveCache`]. Because the
//! base directory of a [`LexicalResolver`] is fixed at construction, a cached
//! answer is always identical to a fresh one.
//!
//! # Examples
//!
//! ```
//! use inside::path::{LexicalResolver, PathResolver, ResolveCache};
//! use std::path::{Path, PathBuf};
//!
//! # #[cfg(unix)]
//! # {
//! let resolver = LexicalResolver::new("/work").unwrap();
//! let mut cache = ResolveCache::new();
//!
//! let resolved = cache.get_or_resolve(Path::new("src/../docs"), |p| resolver.resolve(p));
//! assert_eq!(resolved, PathBuf::from("/work/docs"));
//! assert_eq!(cache.len(), 1);
//! # }
//! ```

pub mod cache;
pub mod normalize;
pub mod relationship;
pub mod relative;
pub mod resolver;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use cache::{CacheStats, EvictionPolicy, ResolveCache, DEFAULT_CAPACITY};
pub use relationship::PathRelationship;
pub use resolver::{LexicalResolver, PathResolver};
