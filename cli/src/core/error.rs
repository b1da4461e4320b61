//! # devpath Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout devpath. Every failure
//! a command can hit falls into one of a small number of kinds:
//!
//! - **Validation**: malformed arguments (wrong count, protocol prefix on a repo path).
//! - **AlreadyExists**: the target repository directory is already present.
//! - **FileSystem**: directory creation, removal or file moves failed.
//! - **ExternalCommand / CommandSpawn**: `git`, `make` or `go` failed to start or exited non-zero.
//! - **Config**: the configuration file or `DEVPATH` is unusable.
//!
//! ## Architecture
//!
//! - `DevpathError`: a `thiserror` enum with one variant per kind.
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so callers can attach
//!   context with `anyhow::Context` while tests and callers can still recover
//!   the kind with `downcast_ref::<DevpathError>()`.
//!
//! ## Examples
//!
//! ```rust
//! if path.exists() {
//!     anyhow::bail!(DevpathError::AlreadyExists { path: path.to_path_buf() });
//! }
//!
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<DevpathError>(), Some(DevpathError::Validation(_))) => { /* ... */ }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for devpath.
#[derive(Error, Debug)]
pub enum DevpathError {
    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Repository already exists in DEVPATH: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    #[error("Failed to start command '{cmd}': {source}")]
    CommandSpawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
