//! Path resolution collaborator.
//!
//! The containment predicate never decides on its own what "absolute" means
//! or how to combine a relative path with a base. It asks a [`PathResolver`].
//! [`LexicalResolver`] is the host implementation: purely lexical, with an
//! explicit base directory.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Error, Result};
use crate::path::{normalize, relative};

/// Path syntax and resolution rules used by the containment predicate.
///
/// Implementations must be pure: `resolve` has to return the same output for
/// the same input for as long as the implementation is in use, otherwise a
/// cache in front of it would serve stale answers.
#[cfg_attr(test, mockall::automock)]
pub trait PathResolver {
    /// Whether `path` is self-contained and needs no base directory.
    fn is_absolute(&self, path: &Path) -> bool {
        path.is_absolute()
    }

    /// Resolve `path` to an absolute, normalized path.
    fn resolve(&self, path: &Path) -> PathBuf;

    /// The path that navigates from `from` to `to`.
    fn relative(&self, from: &Path, to: &Path) -> PathBuf {
        relative::relative(from, to)
    }

    /// The platform path separator.
    fn separator(&self) -> char {
        MAIN_SEPARATOR
    }
}

/// Resolves paths lexically against a fixed base directory.
///
/// # Examples
///
/// ```
/// use inside::path::{LexicalResolver, PathResolver};
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// # {
/// let resolver = LexicalResolver::new("/srv/app").unwrap();
/// assert_eq!(resolver.resolve(Path::new("static/../logs")), PathBuf::from("/srv/app/logs"));
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalResolver {
    base: PathBuf,
}

impl LexicalResolver {
    /// Create a resolver with an explicit base directory.
    ///
    /// The base is normalized on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `base` is not absolute.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        if !base.is_absolute() {
            return Err(Error::InvalidPath {
                path: base,
                reason: "base directory must be absolute".to_string(),
            });
        }
        Ok(Self {
            base: normalize::collapse(&base),
        })
    }

    /// Create a resolver based at the process working directory.
    ///
    /// The working directory is read once. Later `chdir` calls do not affect
    /// this resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if the working directory cannot be
    /// read.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self {
            base: normalize::current_base()?,
        })
    }

    /// The base directory relative paths are resolved against.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl PathResolver for LexicalResolver {
    fn resolve(&self, path: &Path) -> PathBuf {
        normalize::resolve_against(&self.base, path)
    }
}
