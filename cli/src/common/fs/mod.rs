//! # devpath Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the commands:
//!
//! - **`io`**: Directory creation with fixed permissions, file writes and moves.
//! - **`repo`**: Creating and cleaning up the per-repository directory under `src/`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{io, repo};
//!
//! let dir = repo::make_repo_dir(&workspace, &repo_path, false)?;
//! io::write_string_to_file(&dir.join("README.md"), "# repo\n")?;
//! ```
//!

/// Basic file I/O (`ensure_dir`, `write_string_to_file`, `move_file`).
pub mod io;
/// Repository directory creation and cleanup (`make_repo_dir`, `clean_up`).
pub mod repo;
