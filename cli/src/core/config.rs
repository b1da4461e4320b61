//! # devpath Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional devpath configuration file and resolves the
//! `DEVPATH` workspace root. The configuration only names things: the
//! directories devpath maintains under the root and the make target used by
//! `install`. Every field has a default, so running without a file behaves
//! exactly like the stock layout:
//!
//! ```text
//! $DEVPATH/
//! ├── bin/                      # installed binaries
//! └── src/<host>/<org>/<repo>/  # cloned sources
//!     └── devbin/               # staging dir produced by `make devbin`
//! ```
//!
//! ## Architecture
//!
//! Configuration sources:
//! 1. The file named by `$DEVPATH_CONFIG`, if set
//! 2. Otherwise `config.toml` in the user config directory (`~/.config/devpath/` on Linux)
//! 3. Default values defined in the code
//!
//! The loaded `Config` is validated once and then treated as read-only for
//! the rest of the run.
//!
//! ## Examples
//!
//! ```toml
//! [layout]
//! src_dir = "src"
//! bin_dir = "bin"
//! devbin_dir = "devbin"
//!
//! [build]
//! make_target = "devbin"
//! ```
//!
use crate::core::error::{DevpathError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};
use tracing::{debug, info};

/// Environment variable naming the workspace root.
pub const DEVPATH_ENV: &str = "DEVPATH";
/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "DEVPATH_CONFIG";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

/// Directory names maintained under the workspace root.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory holding cloned sources.
    #[serde(default = "default_src_dir")]
    pub src_dir: String,
    /// Directory receiving installed binaries.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,
    /// Staging directory a project's build populates inside its clone.
    #[serde(default = "default_devbin_dir")]
    pub devbin_dir: String,
}

/// Settings for the build step of `install`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Target passed to `make`.
    #[serde(default = "default_make_target")]
    pub make_target: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            bin_dir: default_bin_dir(),
            devbin_dir: default_devbin_dir(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            make_target: default_make_target(),
        }
    }
}

fn default_src_dir() -> String {
    "src".to_string()
}
fn default_bin_dir() -> String {
    "bin".to_string()
}
fn default_devbin_dir() -> String {
    "devbin".to_string()
}
fn default_make_target() -> String {
    "devbin".to_string()
}

const CONFIG_FILENAME: &str = "config.toml";

/// Loads, validates and returns the configuration for this run.
pub fn load_config() -> Result<Config> {
    let config = match config_path() {
        Some(path) if path.is_file() => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        Some(path) => {
            debug!("Configuration file not found at {}", path.display());
            Config::default()
        }
        None => {
            debug!("Could not determine user config directory, using defaults.");
            Config::default()
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "devpath").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    let layout = &config.layout;
    for (key, value) in [
        ("layout.src_dir", &layout.src_dir),
        ("layout.bin_dir", &layout.bin_dir),
        ("layout.devbin_dir", &layout.devbin_dir),
    ] {
        if !is_single_component(value) {
            return Err(anyhow!(DevpathError::Config(format!(
                "'{}' must be a single directory name, found '{}'",
                key, value
            ))));
        }
    }
    if layout.src_dir == layout.bin_dir {
        return Err(anyhow!(DevpathError::Config(format!(
            "layout.src_dir and layout.bin_dir must differ (both are '{}')",
            layout.src_dir
        ))));
    }
    if config.build.make_target.trim().is_empty() {
        return Err(anyhow!(DevpathError::Config(
            "build.make_target cannot be empty".to_string()
        )));
    }
    Ok(())
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('/')
}

/// Reads the workspace root from `$DEVPATH`.
///
/// Fails when the variable is unset or empty. A leading `~` is expanded; the
/// directory itself is not checked here (see `Workspace::open`).
pub fn resolve_devpath() -> Result<PathBuf> {
    let raw = env::var(DEVPATH_ENV).unwrap_or_default();
    devpath_from_value(&raw)
}

fn devpath_from_value(raw: &str) -> Result<PathBuf> {
    if raw.trim().is_empty() {
        return Err(anyhow!(DevpathError::Config(format!(
            "Unset/Invalid {} environment variable",
            DEVPATH_ENV
        ))));
    }
    let expanded = shellexpand::tilde(raw).into_owned();
    debug!("Resolved {} to {}", DEVPATH_ENV, expanded);
    Ok(PathBuf::from(expanded))
}
