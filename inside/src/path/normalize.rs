//! Lexical path normalization.
//!
//! This module turns arbitrary path input into an absolute, normalized form by:
//! - Joining relative paths onto a base directory
//! - Resolving `.` and `..` components
//! - Dropping redundant and trailing separators
//!
//! Nothing here touches the filesystem. Symlinks are not followed and paths
//! do not need to exist.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `.` and `..` components without consulting the filesystem.
///
/// A `..` that would climb above the root is dropped, so `/a/../..` collapses
/// to `/`. On a path without a root, leading `..` components that cannot be
/// popped are kept.
///
/// # Examples
///
/// ```
/// use inside::path::normalize::collapse;
/// use std::path::{Path, PathBuf};
///
/// // Resolves . and ..
/// assert_eq!(collapse(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
///
/// // Clamps at the root
/// assert_eq!(collapse(Path::new("/a/../../b")), PathBuf::from("/b"));
///
/// // Drops trailing and doubled separators
/// assert_eq!(collapse(Path::new("/a//b/")), PathBuf::from("/a/b"));
/// ```
#[must_use]
pub fn collapse(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !has_root {
                    result.push(Component::ParentDir);
                }
            }
        }
    }

    result
}

/// Resolve `path` against `base` and normalize the result.
///
/// Absolute inputs ignore `base`. `base` is expected to be absolute; if it is
/// not, the result is only as absolute as `base` is.
///
/// # Examples
///
/// ```
/// use inside::path::normalize::resolve_against;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/work");
/// assert_eq!(resolve_against(base, Path::new("a/../b/c")), PathBuf::from("/work/b/c"));
/// assert_eq!(resolve_against(base, Path::new(".")), PathBuf::from("/work"));
/// assert_eq!(resolve_against(base, Path::new("/etc/")), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    collapse(&base.join(path))
}

/// Read the process working directory, normalized.
///
/// # Errors
///
/// Returns [`Error::CurrentDirectory`] if the working directory cannot be read
/// (for example, it was deleted).
pub fn current_base() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(Error::CurrentDirectory)?;
    Ok(collapse(&cwd))
}
