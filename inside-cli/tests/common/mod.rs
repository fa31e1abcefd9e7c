//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const INSIDE_VARS: [&str; 5] = [
    "INSIDE_CONFIG",
    "INSIDE_BASE_DIR",
    "INSIDE_CACHE_CAPACITY",
    "INSIDE_EVICTION",
    "INSIDE_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// Commands run with `HOME` pointing into a temporary directory, so no user
/// configuration is picked up, and with all `INSIDE_*` variables cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("inside").expect("Failed to find inside binary");
        cmd.env("HOME", &self.temp_path);
        for var in INSIDE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--base-dir` set.
    pub fn command_with_base(&self, base: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--base-dir").arg(base);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `~/.inside/config.yaml` inside the isolated home.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(".inside/config.yaml", contents)
    }
}
