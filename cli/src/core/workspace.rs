//! # devpath Workspace
//!
//! File: cli/src/core/workspace.rs
//!
//! ## Overview
//!
//! `Workspace` binds the `DEVPATH` root to the configured layout. It is built
//! once at startup and handed by reference to every command, so no operation
//! depends on module-level state or on the process working directory.
//!
//! ## Usage
//!
//! ```rust
//! let config = config::load_config()?;
//! let root = config::resolve_devpath()?;
//! let workspace = Workspace::open(root, config)?;
//! let target = workspace.repo_dir(&RepoPath::parse("github.com/org/repo")?);
//! ```
//!
use crate::common::fs::io;
use crate::core::config::{BuildConfig, Config, LayoutConfig};
use crate::core::error::{DevpathError, Result};
use crate::core::repo_path::RepoPath;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The workspace root plus the directory names and build settings used under it.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    layout: LayoutConfig,
    build: BuildConfig,
}

impl Workspace {
    /// Opens an existing workspace root, ensuring `src/` and `bin/` exist.
    ///
    /// The root itself is never created; users are expected to make it.
    /// A relative root is resolved against the current directory here, so
    /// later changes of working directory do not move the workspace.
    pub fn open(root: PathBuf, config: Config) -> Result<Self> {
        let root = match root.canonicalize() {
            Ok(abs) if abs.is_dir() => abs,
            _ => bail!(DevpathError::Config(format!(
                "Invalid DEVPATH {:?}: not an existing directory",
                root
            ))),
        };
        let workspace = Self {
            root,
            layout: config.layout,
            build: config.build,
        };
        for dir in [workspace.src_root(), workspace.bin_root()] {
            io::ensure_dir(&dir)
                .with_context(|| format!("Failed to create {:?} directory", dir))?;
        }
        debug!("Opened workspace at {}", workspace.root.display());
        Ok(workspace)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `$DEVPATH/src`
    pub fn src_root(&self) -> PathBuf {
        self.root.join(&self.layout.src_dir)
    }

    /// `$DEVPATH/bin`
    pub fn bin_root(&self) -> PathBuf {
        self.root.join(&self.layout.bin_dir)
    }

    /// Name of the staging directory inside a clone.
    pub fn devbin_dir(&self) -> &str {
        &self.layout.devbin_dir
    }

    pub fn make_target(&self) -> &str {
        &self.build.make_target
    }

    /// Directory a repository lives in: `$DEVPATH/src/<repo>`.
    pub fn repo_dir(&self, repo: &RepoPath) -> PathBuf {
        self.src_root().join(repo.as_path())
    }
}
