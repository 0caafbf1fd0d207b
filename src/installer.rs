//! Install orchestration
//!
//! Assembles the working repository list (project-declared definitions plus
//! user-supplied descriptors), applies settings-derived mirror, proxy, and
//! credential injection as a single batch, then resolves every management
//! entry's coordinate set through the external resolver. The first resolver
//! failure aborts the whole run.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::project::{AncestorChain, Project};
use crate::repository::{
    self, LayoutRegistry, RepositoryDefinition, RepositoryPolicy, RepositorySystem,
};
use crate::resolver::{self, DependencyResolver, ResolutionRequest};
use crate::settings::Settings;

pub struct Installer<'a> {
    resolver: &'a dyn DependencyResolver,
    repository_system: &'a dyn RepositorySystem,
}

impl<'a> Installer<'a> {
    pub fn new(
        resolver: &'a dyn DependencyResolver,
        repository_system: &'a dyn RepositorySystem,
    ) -> Self {
        Self {
            resolver,
            repository_system,
        }
    }

    /// Build the working repository list: declared repositories first, then
    /// descriptors from the command line with an always-update/warn policy,
    /// then settings injection over the whole batch.
    pub fn assemble_repositories(
        &self,
        project: &Project,
        extra_descriptors: Option<&str>,
        settings: &Settings,
        registry: &LayoutRegistry,
    ) -> Result<Vec<RepositoryDefinition>> {
        let mut repositories = Vec::new();

        for declared in &project.repositories {
            repositories.push(declared.to_definition(registry)?);
        }

        if let Some(descriptors) = extra_descriptors {
            let policy = RepositoryPolicy::always_update_warn();
            repositories.extend(repository::parse_list(descriptors, policy, registry)?);
        }

        self.repository_system
            .inject_mirror(&mut repositories, &settings.mirrors);
        self.repository_system
            .inject_proxy(&mut repositories, &settings.proxies);
        self.repository_system
            .inject_authentication(&mut repositories, &settings.servers);

        Ok(repositories)
    }

    pub fn install(
        &self,
        project: &Project,
        chain: &AncestorChain,
        extra_descriptors: Option<&str>,
        settings: &Settings,
        registry: &LayoutRegistry,
        local_repository: &Path,
        dry_run: bool,
    ) -> Result<()> {
        if project.management.is_empty() {
            println!("No plugins in management section");
            return Ok(());
        }

        let repositories =
            self.assemble_repositories(project, extra_descriptors, settings, registry)?;
        let request = ResolutionRequest {
            repositories,
            local_repository: local_repository.to_path_buf(),
        };

        // Log lines go to stdout; the bar tracks entry progress on stderr.
        let progress = if dry_run {
            None
        } else {
            Some(create_progress_bar(project.management.len() as u64))
        };

        for entry in &project.management {
            if let Some(bar) = &progress {
                bar.set_message(entry.key());
            }

            let coordinates = resolver::expand(entry, chain)?;
            for coordinate in &coordinates {
                if dry_run {
                    println!("Resolving {coordinate} with transitive dependencies (dry-run)");
                } else {
                    println!("Resolving {coordinate} with transitive dependencies");
                    self.resolver.resolve(&request, coordinate)?;
                }
            }

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        Ok(())
    }
}

fn create_progress_bar(total_entries: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let bar = ProgressBar::new(total_entries);
    bar.set_style(style);
    bar
}
