//! # devpath Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the foundational pieces every command relies on:
//!
//! - `config`: Configuration file loading and `DEVPATH` resolution
//! - `error`: Error types and the crate-wide `Result` alias
//! - `repo_path`: The validated `host/org/repo` identifier
//! - `workspace`: The immutable workspace value threaded through every operation
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::error::{DevpathError, Result};
//! use crate::core::repo_path::RepoPath;
//! use crate::core::workspace::Workspace;
//! ```
//!
pub mod config;
pub mod error;
pub mod repo_path;
pub mod workspace;
