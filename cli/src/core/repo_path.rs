//! # Repository Paths
//!
//! File: cli/src/core/repo_path.rs
//!
//! A `RepoPath` is the `host/org/repo` string a user passes to `get`,
//! `install` or `init`. The same string is the directory under `src/` and,
//! prefixed with `https://`, the clone URL.
//!
use crate::core::error::{DevpathError, Result};
use anyhow::bail;
use std::fmt;
use std::path::Path;

/// Prefixes that mark a full clone URL rather than a repo path.
const PROTOCOL_PREFIXES: [&str; 2] = ["https://", "git@"];

/// A validated, slash-separated repository path such as `github.com/org/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath(String);

impl RepoPath {
    /// Parses user input into a `RepoPath`.
    ///
    /// Protocol prefixes are rejected since clones always go over HTTPS.
    /// Absolute paths and `.`/`..` segments are rejected so the directory
    /// (and any cleanup of it) stays inside the source root.
    pub fn parse(input: &str) -> Result<Self> {
        if PROTOCOL_PREFIXES.iter().any(|p| input.starts_with(p)) {
            bail!(DevpathError::Validation(
                "invalid git repo prefix: do not include protocol prefixes such as https:// or git@"
                    .to_string()
            ));
        }
        if input.starts_with('/') {
            bail!(DevpathError::Validation(format!(
                "repo path '{}' must be relative to DEVPATH",
                input
            )));
        }
        let trimmed = input.trim_end_matches('/');
        if trimmed.is_empty() {
            bail!(DevpathError::Validation("repo path cannot be empty".to_string()));
        }
        if trimmed
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            bail!(DevpathError::Validation(format!(
                "repo path '{}' contains an empty, '.' or '..' segment",
                input
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// The HTTPS URL `git clone` is pointed at.
    pub fn clone_url(&self) -> String {
        format!("https://{}", self.0)
    }

    /// Final path segment, used as the project name.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
