//! # devpath Install Handler
//!
//! File: cli/src/commands/install.rs
//!
//! ## Overview
//!
//! Implements `devpath install <repo>`, which builds on `get`:
//!
//! 1. Clone the repository exactly like `get` (same validation and cleanup).
//! 2. Run `make devbin` inside the clone. The project's Makefile is expected
//!    to place its binaries in a top-level `devbin/` directory.
//! 3. Move every regular file directly inside `devbin/` to `$DEVPATH/bin`,
//!    replacing binaries of the same name.
//! 4. Remove `devbin/`.
//!
//! Only the top level of `devbin/` is installed. Subdirectories are skipped
//! and, when any were skipped, `devbin/` is kept so their contents are not
//! lost. A failed move stops the install and names the file.
//!
//! A failed build leaves the clone in place; only the clone step cleans up.
//!
//! ## Usage
//!
//! ```bash
//! devpath install github.com/org/tool
//! ls $DEVPATH/bin
//! ```
//!
use crate::commands::get;
use crate::common::{fs::io, process};
use crate::core::error::{DevpathError, Result};
use crate::core::repo_path::RepoPath;
use crate::core::workspace::Workspace;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Clones, builds and installs `repo`.
pub(crate) async fn install(workspace: &Workspace, repo: &RepoPath) -> Result<()> {
    let dir = get::clone_repo(workspace, repo).await?;
    build(workspace, &dir).await?;
    let installed = install_binaries(workspace, &dir)?;
    println!(
        "Installed {} binar{} from {} into {}",
        installed.len(),
        if installed.len() == 1 { "y" } else { "ies" },
        repo,
        workspace.bin_root().display()
    );
    Ok(())
}

/// Runs `make <target>` in the repository directory.
async fn build(workspace: &Workspace, repo_dir: &Path) -> Result<()> {
    let target = workspace.make_target();
    let output = process::run_command("make", &[target], repo_dir)
        .await
        .with_context(|| format!("failed to run make {}", target))?;
    output.log();
    Ok(())
}

/// Moves the top-level files of `<repo_dir>/devbin` into the workspace `bin/`.
///
/// Returns the installed destination paths in file-name order.
fn install_binaries(workspace: &Workspace, repo_dir: &Path) -> Result<Vec<PathBuf>> {
    let devbin = repo_dir.join(workspace.devbin_dir());
    if !devbin.is_dir() {
        return Err(anyhow!(DevpathError::FileSystem(format!(
            "failed to open {}: build did not produce {:?}",
            workspace.devbin_dir(),
            devbin
        ))));
    }

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for entry in WalkDir::new(&devbin)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("failed to list {:?}", devbin))?;
        if entry.file_type().is_dir() {
            skipped.push(entry.file_name().to_os_string());
        } else {
            files.push(entry.file_name().to_os_string());
        }
    }

    info!("Installing binaries: {:?}", files);
    let bin_root = workspace.bin_root();
    let mut installed = Vec::with_capacity(files.len());
    for name in &files {
        let destination = bin_root.join(name);
        io::move_file(&devbin.join(name), &destination)
            .with_context(|| format!("failed to move file {:?}", name))?;
        installed.push(destination);
    }

    if skipped.is_empty() {
        fs::remove_dir_all(&devbin)
            .with_context(|| format!("failed to remove directory {:?}", devbin))?;
    } else {
        warn!(
            "Skipped subdirectories of {:?}: {:?}; leaving it in place",
            devbin, skipped
        );
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use tempfile::{tempdir, TempDir};

    fn workspace() -> (TempDir, Workspace) {
        let root = tempdir().unwrap();
        let workspace = Workspace::open(root.path().to_path_buf(), Config::default()).unwrap();
        (root, workspace)
    }

    fn repo_with_devbin(workspace: &Workspace) -> PathBuf {
        let repo_dir = workspace.src_root().join("host/org/repo");
        fs::create_dir_all(repo_dir.join("devbin")).unwrap();
        repo_dir
    }

    #[test]
    fn test_install_binaries_moves_files_and_removes_devbin() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = repo_with_devbin(&workspace);
        fs::write(repo_dir.join("devbin/b"), "bin b")?;
        fs::write(repo_dir.join("devbin/a"), "bin a")?;

        let installed = install_binaries(&workspace, &repo_dir)?;

        assert_eq!(
            installed,
            vec![workspace.bin_root().join("a"), workspace.bin_root().join("b")]
        );
        assert_eq!(fs::read_to_string(workspace.bin_root().join("a"))?, "bin a");
        assert!(!repo_dir.join("devbin").exists());
        assert!(repo_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_install_binaries_skips_subdirectories() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = repo_with_devbin(&workspace);
        fs::write(repo_dir.join("devbin/a"), "a")?;
        fs::write(repo_dir.join("devbin/b"), "b")?;
        fs::create_dir(repo_dir.join("devbin/sub"))?;
        fs::write(repo_dir.join("devbin/sub/c"), "c")?;

        install_binaries(&workspace, &repo_dir)?;

        assert!(workspace.bin_root().join("a").is_file());
        assert!(workspace.bin_root().join("b").is_file());
        assert!(!workspace.bin_root().join("c").exists());
        assert!(!workspace.bin_root().join("sub").exists());
        assert_eq!(fs::read_to_string(repo_dir.join("devbin/sub/c"))?, "c");
        Ok(())
    }

    #[test]
    fn test_install_binaries_overwrites_existing() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = repo_with_devbin(&workspace);
        fs::write(workspace.bin_root().join("tool"), "v1")?;
        fs::write(repo_dir.join("devbin/tool"), "v2")?;

        install_binaries(&workspace, &repo_dir)?;

        assert_eq!(fs::read_to_string(workspace.bin_root().join("tool"))?, "v2");
        Ok(())
    }

    #[test]
    fn test_install_binaries_missing_devbin() {
        let (_root, workspace) = workspace();
        let repo_dir = workspace.src_root().join("host/org/repo");
        fs::create_dir_all(&repo_dir).unwrap();

        let err = install_binaries(&workspace, &repo_dir).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DevpathError>(),
            Some(DevpathError::FileSystem(_))
        ));
    }

    #[test]
    fn test_install_binaries_move_failure_names_file() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = repo_with_devbin(&workspace);
        fs::write(repo_dir.join("devbin/tool"), "x")?;
        // A non-empty directory in the way makes the rename fail.
        fs::create_dir_all(workspace.bin_root().join("tool/occupied"))?;

        let err = install_binaries(&workspace, &repo_dir).unwrap_err();

        assert!(err.to_string().contains("failed to move file \"tool\""));
        assert!(repo_dir.join("devbin/tool").is_file());
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_runs_make_target() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = workspace.src_root().join("host/org/repo");
        fs::create_dir_all(&repo_dir)?;
        fs::write(
            repo_dir.join("Makefile"),
            "devbin:\n\tmkdir -p devbin\n\tprintf '#!/bin/sh\\n' > devbin/hello\n",
        )?;

        build(&workspace, &repo_dir).await?;

        assert!(repo_dir.join("devbin/hello").is_file());
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_failure_keeps_make_stderr() -> Result<()> {
        let (_root, workspace) = workspace();
        let repo_dir = workspace.src_root().join("host/org/repo");
        fs::create_dir_all(&repo_dir)?;
        fs::write(repo_dir.join("Makefile"), "all:\n\ttrue\n")?;

        let err = build(&workspace, &repo_dir).await.unwrap_err();

        assert!(err.to_string().contains("failed to run make devbin"));
        match err.downcast_ref::<DevpathError>() {
            Some(DevpathError::ExternalCommand { output, .. }) => {
                assert!(output.contains("devbin"), "stderr was: {}", output)
            }
            other => panic!("unexpected error: {:?}", other),
        }
        Ok(())
    }
}
