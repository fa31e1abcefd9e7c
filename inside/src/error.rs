//! Error types for the inside library.
//!
//! The containment predicate itself never fails. Errors only arise while
//! setting things up: reading the working directory, validating a base
//! directory, or loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an inside error.
///
/// # Examples
///
/// ```
/// use inside::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the inside library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The process working directory could not be read.
    #[error("cannot determine current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is a configuration or validation problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use inside::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "cache.capacity".to_string(),
    ///     message: "must be at least 1".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Configuration(_))
    }
}
