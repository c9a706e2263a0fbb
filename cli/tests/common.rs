//! # Folio CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, etc.).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate, so
//! helpers live here and are pulled in with `mod common;`.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get Folio Command (`folio_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `folio` binary.
///
/// ## Panics
/// Panics if the `folio` binary cannot be found via `Command::cargo_bin`.
pub fn folio_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary for testing")
}

/// # Isolated Config (`isolated_config`)
///
/// Writes `contents` to a `folio.toml` in a fresh temporary directory and
/// returns a command that uses it via `FOLIO_CONFIG`, running inside that
/// directory so no user or project configuration leaks into the test.
///
/// The `TempDir` must be kept alive for as long as the command runs.
pub fn isolated_config(contents: &str) -> (TempDir, Command) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("folio.toml");
    fs::write(&path, contents).expect("Failed to write test config");

    let mut cmd = folio_cmd();
    cmd.current_dir(dir.path()).env("FOLIO_CONFIG", &path);
    (dir, cmd)
}

/// A configuration with the typing delay switched off.
pub const NO_DELAY_CONFIG: &str = "[chat]\ntyping_delay_ms = 0\ntyping_jitter_ms = 0\n";
