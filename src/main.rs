//! plum - plugin management helper for Maven projects
//!
//! Reads the plugin-management section of a project manifest tree, resolves
//! every entry to fully-qualified artifact coordinates, and either reports on
//! them or downloads them into the local repository via the host build tool.

use clap::Parser;

mod cli;
mod commands;
mod coordinate;
mod error;
mod host;
mod installer;
mod jdk;
mod local_repo;
mod project;
mod repository;
mod resolver;
mod settings;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => commands::list::run(cli.manifest, args),
        Commands::Install(args) => commands::install::run(cli.manifest, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
