//! # devpath Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every external tool devpath drives (`git`, `make`, `go`) goes through
//! `run_command`. It runs the program to completion in a given directory,
//! captures both output streams and maps failure into `DevpathError`:
//!
//! - Spawn failure (program missing, bad cwd) → `DevpathError::CommandSpawn`
//! - Non-zero exit → `DevpathError::ExternalCommand`, with the captured
//!   stderr as `output`, unmodified
//!
//! ## Architecture
//!
//! The child is started with stdout and stderr piped and stdin closed.
//! `tokio::process::Child::wait_with_output` drains both pipes concurrently
//! while waiting for exit, so a chatty build can never fill a pipe buffer and
//! stall. No timeout is applied: a hanging `git clone` blocks the run.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! let output = process::run_command("git", &["init"], &repo_dir).await?;
//! tracing::info!("{}", output.stderr);
//! ```
//!
use crate::core::error::{DevpathError, Result};
use anyhow::anyhow;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Logs whatever the command printed at `info` level, skipping empty streams.
    pub fn log(&self) {
        for stream in [&self.stdout, &self.stderr] {
            let text = stream.trim_end();
            if !text.is_empty() {
                info!("{}", text);
            }
        }
    }
}

/// Runs `program` with `args` inside `cwd` and waits for it to finish.
///
/// # Errors
///
/// * `DevpathError::CommandSpawn` if the process cannot be started.
/// * `DevpathError::ExternalCommand` if it exits unsuccessfully; `output`
///   holds its stderr verbatim and `status` its exit code (`?` when killed
///   by a signal).
pub async fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    let cmd_line = display_command(program, args);
    info!("Executing command: {} (in {})", cmd_line, cwd.display());

    let child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| {
            anyhow!(DevpathError::CommandSpawn {
                cmd: cmd_line.clone(),
                source,
            })
        })?;

    let output = child.wait_with_output().await.map_err(|source| {
        anyhow!(DevpathError::CommandSpawn {
            cmd: cmd_line.clone(),
            source,
        })
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let status = output
            .status
            .code()
            .map_or("?".to_string(), |c| c.to_string());
        error!("Command '{}' failed with exit code {}", cmd_line, status);
        return Err(anyhow!(DevpathError::ExternalCommand {
            cmd: cmd_line,
            status,
            output: stderr,
        }));
    }

    debug!("Command '{}' completed successfully.", cmd_line);
    Ok(CommandOutput { stdout, stderr })
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_captures_both_streams() {
        let dir = tempdir().unwrap();
        let output = run_command("sh", &["-c", "echo out; echo err >&2"], dir.path())
            .await
            .unwrap();
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_uses_cwd() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("here.txt"), "").unwrap();
        let output = run_command("ls", &[], dir.path()).await.unwrap();
        assert!(output.stdout.contains("here.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_nonzero_keeps_stderr_verbatim() {
        let dir = tempdir().unwrap();
        let err = run_command("sh", &["-c", "printf 'fatal: nope\\n  detail' >&2; exit 3"], dir.path())
            .await
            .unwrap_err();
        match err.downcast_ref::<DevpathError>() {
            Some(DevpathError::ExternalCommand { status, output, cmd }) => {
                assert_eq!(status, "3");
                assert_eq!(output, "fatal: nope\n  detail");
                assert!(cmd.starts_with("sh -c"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_large_output_does_not_block() {
        let dir = tempdir().unwrap();
        // Well past a 64 KiB pipe buffer on both streams.
        let script = "i=0; while [ $i -lt 5000 ]; do echo 'xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx'; echo 'yyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyy' >&2; i=$((i+1)); done";
        let output = run_command("sh", &["-c", script], dir.path()).await.unwrap();
        assert_eq!(output.stdout.lines().count(), 5000);
        assert_eq!(output.stderr.lines().count(), 5000);
    }

    #[tokio::test]
    async fn test_run_command_not_found() {
        let dir = tempdir().unwrap();
        let err = run_command("nonexistent_devpath_cmd_4321", &["x"], dir.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DevpathError>(),
            Some(DevpathError::CommandSpawn { .. })
        ));
        assert!(err.to_string().contains("nonexistent_devpath_cmd_4321 x"));
    }

    #[test]
    fn test_display_command() {
        assert_eq!(display_command("git", &["clone", "url", "."]), "git clone url .");
        assert_eq!(display_command("make", &[]), "make");
    }
}
