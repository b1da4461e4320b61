//! # devpath Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the small set of filesystem primitives devpath
//! needs, wrapping `std::fs` with consistent error context:
//!
//! - **`ensure_dir`**: Creates a single directory with mode `0755` if it is
//!   missing. Used for `$DEVPATH/src` and `$DEVPATH/bin`.
//! - **`write_string_to_file`**: Writes a file, creating its parent first.
//!   Used by `init` for `README.md`.
//! - **`move_file`**: Moves a file, overwriting the destination. Used by
//!   `install` to place binaries in `$DEVPATH/bin`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir(&workspace.bin_root())?;
//! io::write_string_to_file(&repo_dir.join("README.md"), "# repo\n")?;
//! io::move_file(&devbin.join("tool"), &workspace.bin_root().join("tool"))?;
//! ```
//!
use crate::core::error::{DevpathError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates only the final component (parents must already exist), with
/// permissions `rwxr-xr-x` on unix. An existing directory is left alone.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DevpathError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Writes string content to a file, overwriting it if present.
///
/// The parent directory is created (recursively) first.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Moves `from` to `to`, replacing any existing file at `to`.
///
/// Tries a plain rename first. If that fails while the source is still a
/// regular file (typically because the paths sit on different filesystems),
/// the file is copied then removed instead.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => {
            debug!("Renamed {:?} -> {:?}", from, to);
            Ok(())
        }
        Err(e) if from.is_file() => {
            debug!("Rename failed ({}), copying {:?} -> {:?}", e, from, to);
            let mut options = fs_extra::file::CopyOptions::new();
            options.overwrite = true;
            fs_extra::file::move_file(from, to, &options)
                .map(|_| ())
                .map_err(|copy_err| {
                    anyhow::anyhow!(DevpathError::FileSystem(format!(
                        "Failed to move {:?} to {:?}: {} (rename: {})",
                        from, to, copy_err, e
                    )))
                })
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to move {:?} to {:?}", from, to))),
    }
}
