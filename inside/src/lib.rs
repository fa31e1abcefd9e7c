#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # inside
//!
//! A library for deciding whether one filesystem path lies strictly inside
//! another.
//!
//! Both paths may be absolute or relative. Relative paths are resolved
//! lexically against a fixed base directory, and repeated relative inputs are
//! served from a bounded resolution cache.
//!
//! ## Core Types
//!
//! - [`ContainmentChecker`]: the predicate, with its resolver and cache
//! - [`SharedChecker`]: a checker usable from several threads
//! - [`PathRelationship`]: ancestor / descendant / same / unrelated
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use inside::ContainmentChecker;
//!
//! # #[cfg(unix)]
//! # {
//! let mut checker = ContainmentChecker::with_base("/home/user").unwrap();
//!
//! assert!(checker.is_inside("a/b/c", "a"));
//! assert!(!checker.is_inside("/a/b", "/a/b"));
//! assert!(!checker.is_inside("/a/b/../../etc", "/a"));
//! # }
//! ```

pub mod config;
pub mod containment;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use containment::{is_path_inside, ContainmentChecker, SharedChecker};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CacheStats, EvictionPolicy, PathRelationship, PathResolver};
