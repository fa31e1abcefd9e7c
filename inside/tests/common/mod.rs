//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! inside library.

use std::env;
use std::path::PathBuf;

use inside::ContainmentChecker;

/// Base directory used by the literal path scenarios.
#[allow(dead_code)]
pub const BASE: &str = "/home/user";

/// A checker resolving relative paths against [`BASE`].
#[allow(dead_code)]
pub fn checker() -> ContainmentChecker {
    ContainmentChecker::with_base(BASE).unwrap()
}

/// Path to a config fixture.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(name)
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every `INSIDE_*` variable for the lifetime of the returned guards.
#[allow(dead_code)]
pub fn clear_inside_env_vars() -> Vec<EnvGuard> {
    [
        "INSIDE_BASE_DIR",
        "INSIDE_CACHE_CAPACITY",
        "INSIDE_EVICTION",
        "INSIDE_LOG_MODE",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}
