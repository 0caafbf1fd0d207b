//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// plum - plugin management helper for Maven projects
///
/// Inspect a project's plugin-management section and pre-fetch the managed
/// plugins into the local artifact repository.
#[derive(Parser, Debug)]
#[command(
    name = "plum",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Plugin-management helper for Maven projects",
    long_about = "plum reads the plugin-management section of a project manifest tree, \
                  resolves every entry to fully-qualified artifact coordinates, and either \
                  reports on them or downloads them into the local repository via the host \
                  build tool.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  plum list --host-version 3.9.6         \x1b[90m# List managed plugins\x1b[0m\n   \
                  plum list --jdk-version                \x1b[90m# Include required JDK versions\x1b[0m\n   \
                  plum install                           \x1b[90m# Download all managed plugins\x1b[0m\n   \
                  plum install --repositories https://repo.acme.com\n\n\
                  "
)]
pub struct Cli {
    /// Project manifest (defaults to plum.yaml in the current directory)
    #[arg(long, short = 'm', global = true, env = "PLUM_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List managed plugins with versions, executions, and dependencies
    List(ListArgs),

    /// Resolve and download every managed plugin into the local repository
    Install(InstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
