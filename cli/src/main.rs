//! # devpath Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! devpath keeps every repository a developer works on under one root,
//! `$DEVPATH`, laid out by where it came from:
//!
//! ```text
//! $DEVPATH/src/github.com/org/repo
//! $DEVPATH/bin/<installed binaries>
//! ```
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on `-v` flags
//! - Resolving `DEVPATH`, preparing `src/` and `bin/`, and entering `src/`
//! - Handing the command to the executor and reporting errors
//!
//! ## Examples
//!
//! ```bash
//! export DEVPATH=~/dev
//! devpath get github.com/org/repo
//! devpath -v install github.com/org/tool
//! devpath init github.com/me/project go
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

use crate::commands::{Command, Executor};
use crate::core::error::Result;
use crate::core::{config, workspace::Workspace};
use anyhow::Context;

const USAGE: &str = "\
get - clone git repository into organized devpath
install - runs get then builds the project from makefile and installs that to $DEVPATH/bin";

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "devpath",
    about = "Organize repositories under $DEVPATH",
    long_about = "Clone repositories into $DEVPATH/src/<host>/<org>/<repo>, build and install\n\
                  their binaries into $DEVPATH/bin, and scaffold new repositories.",
    disable_help_subcommand = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Show subprocess output and progress (-vv for debug logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository into $DEVPATH/src/<repo>
    Get(RepoArgs),
    /// Get a repository, run `make devbin`, and move the results into $DEVPATH/bin
    Install(RepoArgs),
    /// Create a new git repository at $DEVPATH/src/<repo> [language]
    Init(RepoArgs),
    /// Print usage
    Help {
        /// Ignored; `help <anything>` prints the same summary.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        _rest: Vec<String>,
    },
}

/// Raw positional arguments; the executor validates their count.
#[derive(clap::Args, Debug)]
struct RepoArgs {
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

impl Commands {
    fn into_command(self) -> Option<(Command, Vec<String>)> {
        match self {
            Commands::Get(a) => Some((Command::Get, a.args)),
            Commands::Install(a) => Some((Command::Install, a.args)),
            Commands::Init(a) => Some((Command::Init, a.args)),
            Commands::Help { .. } => None,
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(command: Command, args: Vec<String>) -> Result<()> {
    let cfg = config::load_config()?;
    let root = config::resolve_devpath()?;
    let workspace = Workspace::open(root, cfg)?;
    tracing::info!("Using workspace {}", workspace.root().display());

    let src_root = workspace.src_root();
    std::env::set_current_dir(&src_root)
        .with_context(|| format!("Failed to open {:?}", src_root))?;

    Executor::new(command, &workspace).execute(&args).await
}

#[tokio::main]
async fn main() {
    // Parse failures other than --help/--version exit 1 like every other error.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    init_logging(cli.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let Some((command, args)) = cli.command.and_then(Commands::into_command) else {
        println!("{}", USAGE);
        return;
    };

    if let Err(e) = run(command, args).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
