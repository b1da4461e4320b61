//! # Repository Directories
//!
//! File: cli/src/common/fs/repo.rs
//!
//! Creates the nested `src/<host>/<org>/<repo>` directory for a repository
//! and removes it again when a clone fails.
//!
use crate::core::error::{DevpathError, Result};
use crate::core::repo_path::RepoPath;
use crate::core::workspace::Workspace;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Creates the directory for `repo` under the source root and returns it.
///
/// Fails with `DevpathError::AlreadyExists` when the directory is present and
/// `ignore_existing` is false; nothing is touched in that case. Any failure
/// after the existence check removes the directory again before returning.
pub fn make_repo_dir(workspace: &Workspace, repo: &RepoPath, ignore_existing: bool) -> Result<PathBuf> {
    let dir = workspace.repo_dir(repo);
    if dir.symlink_metadata().is_ok() && !ignore_existing {
        return Err(anyhow!(DevpathError::AlreadyExists { path: dir }));
    }

    if let Err(e) = fs::create_dir_all(&dir) {
        clean_up(workspace, repo);
        return Err(anyhow::Error::new(e)
            .context(format!("Failed to create directory {:?}", dir)));
    }

    // The directory must be usable as a working directory for the subprocesses.
    if let Err(e) = fs::read_dir(&dir) {
        clean_up(workspace, repo);
        return Err(anyhow::Error::new(e).context(format!("Failed to open directory {:?}", dir)));
    }

    info!("Created repository directory {}", dir.display());
    Ok(dir)
}

/// Best-effort recursive removal of `$DEVPATH/src/<repo>`.
///
/// Only the final directory is removed; parent segments such as the host
/// directory stay. Failures are logged and never returned so they cannot
/// mask the error that triggered the cleanup.
pub fn clean_up(workspace: &Workspace, repo: &RepoPath) {
    let dir = workspace.repo_dir(repo);
    match remove_tree(&dir) {
        Ok(()) => debug!("Cleaned up {}", dir.display()),
        Err(e) => warn!("Failed to clean up created directory structure: {:#}", e),
    }
}

fn remove_tree(dir: &std::path::Path) -> Result<()> {
    if dir.symlink_metadata().is_err() {
        return Ok(());
    }
    fs::remove_dir_all(dir).with_context(|| format!("Failed to remove {:?}", dir))
}
