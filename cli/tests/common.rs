//! # rulebot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate; the ones
//! that need these helpers declare `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get rulebot Command (`rulebot_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `rulebot` binary.
///
/// ## Panics
/// Panics if the `rulebot` binary cannot be found via `Command::cargo_bin`.
pub fn rulebot_cmd() -> Command {
    Command::cargo_bin("rulebot").expect("Failed to find rulebot binary for testing")
}

/// # Isolated rulebot Command (`isolated_cmd`)
///
/// Like `rulebot_cmd`, but reads configuration only from a `config.toml`
/// written into `dir` with `contents`, so a developer's own user or project
/// configuration cannot change test results.
pub fn isolated_cmd(dir: &TempDir, contents: &str) -> Command {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write test config");
    let mut cmd = rulebot_cmd();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(path.to_str().expect("temp path is valid UTF-8"));
    cmd
}
