//! # devpath Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`):
//!
//! - **`fs`**: Directory creation, file moves, and per-repository directory bookkeeping.
//! - **`process`**: Running `git`, `make` and `go` with captured output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs::repo, process};
//!
//! let dir = repo::make_repo_dir(&workspace, &repo_path, false)?;
//! process::run_command("git", &["init"], &dir).await?;
//! ```
//!

/// Utilities for filesystem operations (I/O, repository directories).
pub mod fs;
/// Running external processes and capturing their output.
pub mod process;
