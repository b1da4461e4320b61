//! # devpath CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests. Each test gets its own
//! temporary `DEVPATH` root and an isolated configuration path, so runs never
//! touch the real workspace or user config.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a command for the compiled `devpath` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn devpath_cmd() -> Command {
    Command::cargo_bin("devpath").expect("Failed to find devpath binary for testing")
}

/// A temporary `DEVPATH` root.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp DEVPATH"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn src(&self) -> PathBuf {
        self.root().join("src")
    }

    pub fn bin(&self) -> PathBuf {
        self.root().join("bin")
    }

    /// `devpath` with `DEVPATH`, config location and git identity pointed at this test.
    pub fn cmd(&self) -> Command {
        let mut cmd = devpath_cmd();
        cmd.env("DEVPATH", self.root())
            .env("DEVPATH_CONFIG", self.root().join("no-config.toml"))
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_AUTHOR_NAME", "devpath tests")
            .env("GIT_AUTHOR_EMAIL", "tests@devpath.invalid")
            .env("GIT_COMMITTER_NAME", "devpath tests")
            .env("GIT_COMMITTER_EMAIL", "tests@devpath.invalid")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Names of the entries directly under `dir`, sorted.
    pub fn list(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
