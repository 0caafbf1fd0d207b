//! List command implementation
//!
//! Reports every management entry in declared order: identity and resolved
//! version, execution bindings, and sub-dependency coordinates. With
//! `--jdk-version`, each coordinate also carries the minimum JDK release its
//! locally cached jar requires; jars not yet downloaded show `N/A`.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::ListArgs;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::host;
use crate::jdk;
use crate::local_repo;
use crate::project::{AncestorChain, ExecutionBinding, ManagementEntry, Project};
use crate::resolver;

/// Run list command
pub fn run(manifest: Option<PathBuf>, args: ListArgs) -> Result<()> {
    host::ensure_supported(args.host_version.as_deref())?;

    let manifest_path = crate::project::manifest_path(manifest)?;
    let (project, chain) = Project::load_with_ancestors(&manifest_path)?;

    if project.management.is_empty() {
        println!("No plugins in management section");
        return Ok(());
    }

    let local_repository = local_repo::local_repository(args.local_repo.as_deref())?;

    println!("{}", Style::new().bold().apply_to("Plugins in management:"));
    println!("----------------------------------------");
    for entry in &project.management {
        print_entry(entry, &chain, args.jdk_version, &local_repository)?;
        println!();
    }

    Ok(())
}

fn print_entry(
    entry: &ManagementEntry,
    chain: &AncestorChain,
    jdk_version: bool,
    local_repository: &Path,
) -> Result<()> {
    let version = resolver::resolve_version(entry, chain)?;
    let coordinate = Coordinate::new(&entry.group, &entry.artifact, &version)?;
    println!(
        "{}{}",
        Style::new().bold().apply_to(coordinate.to_string()),
        jdk_suffix(&coordinate, jdk_version, local_repository)
    );

    if !entry.executions.is_empty() {
        println!("  Executions:");
        for execution in &entry.executions {
            println!("    - {}", format_execution(execution));
        }
    }

    if !entry.dependencies.is_empty() {
        println!("  Dependencies:");
        for dependency in &entry.dependencies {
            let coordinate = Coordinate::new(
                &dependency.group,
                &dependency.artifact,
                &dependency.version,
            )?;
            println!(
                "    - {}{}",
                coordinate,
                jdk_suffix(&coordinate, jdk_version, local_repository)
            );
        }
    }

    Ok(())
}

fn jdk_suffix(coordinate: &Coordinate, jdk_version: bool, local_repository: &Path) -> String {
    if !jdk_version {
        return String::new();
    }
    let jar_path = local_repo::artifact_jar_path(local_repository, coordinate);
    format!(" [JDK version: {}]", jdk::minimum_jdk_version(&jar_path))
}

fn format_execution(execution: &ExecutionBinding) -> String {
    format!(
        "{} [phase: {}, goals: [{}]]",
        execution.id,
        execution.phase.as_deref().unwrap_or("none"),
        execution.goals.join(", ")
    )
}
