//! # devpath Init Handler
//!
//! File: cli/src/commands/init.rs
//!
//! ## Overview
//!
//! Implements `devpath init <repo> [language]`, which scaffolds a new
//! repository at `$DEVPATH/src/<repo>`:
//!
//! 1. Create the directory (fails if it already exists).
//! 2. `git init`
//! 3. Write `README.md` containing `# <name>` where `<name>` is the last
//!    segment of the repo path.
//! 4. Language setup, currently `go mod init <repo>` for `go` (any case).
//! 5. `git add .` and `git commit -m "Initialize repository"`.
//!
//! Unlike `get`, nothing is rolled back when a later step fails: the
//! directory and whatever steps completed stay on disk.
//!
//! ## Usage
//!
//! ```bash
//! devpath init github.com/me/newtool go
//! ```
//!
use crate::common::{
    fs::{io, repo},
    process,
};
use crate::core::error::Result;
use crate::core::repo_path::RepoPath;
use crate::core::workspace::Workspace;
use anyhow::Context;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

const INITIAL_COMMIT_MESSAGE: &str = "Initialize repository";

/// Languages `init` knows how to set up beyond the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Go,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("go") {
            Ok(Language::Go)
        } else {
            Err(format!("no setup available for language '{}'", s))
        }
    }
}

impl Language {
    async fn set_up(self, repo: &RepoPath, dir: &Path) -> Result<()> {
        match self {
            Language::Go => {
                process::run_command("go", &["mod", "init", repo.as_str()], dir)
                    .await
                    .context("failed to initialize go module")?
                    .log();
            }
        }
        Ok(())
    }
}

/// Creates and commits a new repository for `repo`.
pub(crate) async fn init_repo(workspace: &Workspace, repo: &RepoPath, language: Option<&str>) -> Result<()> {
    let dir = repo::make_repo_dir(workspace, repo, false)?;

    git(&dir, &["init"]).await?;

    let readme = format!("# {}\n", repo.name());
    io::write_string_to_file(&dir.join("README.md"), &readme)?;

    match language.map(str::parse::<Language>) {
        Some(Ok(lang)) => lang.set_up(repo, &dir).await?,
        Some(Err(reason)) => warn!("{}; only the README will be created", reason),
        None => {}
    }

    git(&dir, &["add", "."]).await?;
    git(&dir, &["commit", "-m", INITIAL_COMMIT_MESSAGE]).await?;

    info!("Initialized repository {} at {}", repo, dir.display());
    println!("Initialized {} in {}", repo, dir.display());
    Ok(())
}

async fn git(dir: &Path, args: &[&str]) -> Result<()> {
    process::run_command("git", args, dir).await?.log();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_case_insensitive() {
        for input in ["go", "Go", "GO", "gO"] {
            assert_eq!(input.parse::<Language>(), Ok(Language::Go));
        }
        assert!("rust".parse::<Language>().is_err());
        assert!("golang".parse::<Language>().is_err());
    }
}
