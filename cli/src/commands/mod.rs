//! # devpath Command Executor
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module turns one top-level command plus its raw positional arguments
//! into a sequence of directory and subprocess operations:
//!
//! - `get <repo>`: clone `https://<repo>` into `$DEVPATH/src/<repo>`
//! - `install <repo>`: `get`, then `make devbin` and move the results into `$DEVPATH/bin`
//! - `init <repo> [language]`: create `$DEVPATH/src/<repo>` as a fresh git repository
//!
//! ## Architecture
//!
//! - `Command`: closed enum of the three commands, each knowing its arity.
//! - `Executor`: binds a `Command` to the `Workspace` and runs it once.
//!
//! Each command lives in its own module (`get`, `install`, `init`). The
//! executor validates argument counts and repo paths up front, so a
//! malformed invocation fails before anything touches the filesystem.
//!
use crate::core::error::{DevpathError, Result};
use crate::core::repo_path::RepoPath;
use crate::core::workspace::Workspace;
use anyhow::bail;
use std::fmt;
use tracing::{debug, info};

mod get;
mod init;
mod install;

/// The action selected by the first CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Get,
    Install,
    Init,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Get => "get",
            Command::Install => "install",
            Command::Init => "init",
        }
    }

    fn check_arity(self, count: usize) -> Result<()> {
        let ok = match self {
            Command::Get | Command::Install => count == 1,
            Command::Init => (1..=2).contains(&count),
        };
        if ok {
            return Ok(());
        }
        let expected = match self {
            Command::Get | Command::Install => "1 argument",
            Command::Init => "1 or 2 arguments",
        };
        bail!(DevpathError::Validation(format!(
            "{} expects {}, found {}",
            self.name(),
            expected,
            count
        )))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs a single command against a workspace.
pub struct Executor<'a> {
    command: Command,
    workspace: &'a Workspace,
}

impl<'a> Executor<'a> {
    pub fn new(command: Command, workspace: &'a Workspace) -> Self {
        Self { command, workspace }
    }

    /// Validates `args` for the bound command and executes it.
    pub async fn execute(&self, args: &[String]) -> Result<()> {
        self.command.check_arity(args.len())?;
        let repo = RepoPath::parse(&args[0])?;
        info!("Running '{}' for {}", self.command, repo);

        match self.command {
            Command::Get => {
                get::clone_repo(self.workspace, &repo).await?;
            }
            Command::Install => install::install(self.workspace, &repo).await?,
            Command::Init => {
                let language = args.get(1).map(String::as_str);
                init::init_repo(self.workspace, &repo, language).await?
            }
        }
        debug!("'{}' finished", self.command);
        Ok(())
    }
}
