//! # devpath Get Handler
//!
//! File: cli/src/commands/get.rs
//!
//! ## Overview
//!
//! Implements `devpath get <repo>`: creates `$DEVPATH/src/<repo>` and clones
//! `https://<repo>` into it. If the clone fails the freshly created directory
//! is removed again, so a failed `get` leaves no empty checkout behind.
//! `install` reuses this step before building.
//!
//! ## Usage
//!
//! ```bash
//! devpath get github.com/org/repo
//! # -> $DEVPATH/src/github.com/org/repo
//! ```
//!
use crate::common::{fs::repo, process};
use crate::core::error::Result;
use crate::core::repo_path::RepoPath;
use crate::core::workspace::Workspace;
use std::path::PathBuf;
use tracing::info;

/// Clones `repo` into its directory under the source root and returns that directory.
pub(crate) async fn clone_repo(workspace: &Workspace, repo: &RepoPath) -> Result<PathBuf> {
    let dir = repo::make_repo_dir(workspace, repo, false)?;

    let url = repo.clone_url();
    let output = match process::run_command("git", &["clone", &url, "."], &dir).await {
        Ok(output) => output,
        Err(e) => {
            repo::clean_up(workspace, repo);
            return Err(e.context("failed to clone repo"));
        }
    };
    output.log();

    info!("Cloned {} into {}", url, dir.display());
    Ok(dir)
}
