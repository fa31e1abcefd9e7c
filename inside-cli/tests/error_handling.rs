//! Integration tests for error handling and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (path is not inside)
//! - 4: Invalid arguments
//! - 7: Configuration error

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .args(["check", "a/b", "a"])
        .assert()
        .code(0);
}

#[test]
fn test_semantic_failure_exit_code() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .args(["check", "a", "a/b"])
        .assert()
        .code(1);
}

#[test]
fn test_zero_cache_capacity_is_config_error() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .args(["--cache-capacity", "0", "check", "a/b", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("cache.capacity"));
}

#[test]
fn test_invalid_capacity_env_is_config_error() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .env("INSIDE_CACHE_CAPACITY", "many")
        .args(["check", "a/b", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("INSIDE_CACHE_CAPACITY"));
}

#[test]
fn test_invalid_eviction_env_is_config_error() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .env("INSIDE_EVICTION", "random")
        .args(["check", "a/b", "a"])
        .assert()
        .code(7);
}

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();

    env.command_with_base("/srv")
        .arg("--config")
        .arg(env.path().join("missing.yaml"))
        .args(["check", "a/b", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_config_file() {
    let env = TestEnv::new();
    let bad = env.write_file("bad.yaml", "cache:\n  capacty: 10\n");

    env.command_with_base("/srv")
        .arg("--config")
        .arg(&bad)
        .args(["check", "a/b", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_user_config() {
    let env = TestEnv::new();
    env.write_user_config("base_dir: [unclosed\n");

    env.command_with_base("/srv")
        .args(["check", "a/b", "a"])
        .assert()
        .code(7);
}

#[test]
fn test_clap_usage_error() {
    let env = TestEnv::new();

    env.command()
        .args(["bench", "--iterations", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
