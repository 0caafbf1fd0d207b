//! Install command implementation
//!
//! Wires the production services (host-tool resolver, settings injector)
//! into the installer and runs it against the loaded project tree.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::Installer;
use crate::local_repo;
use crate::project::Project;
use crate::repository::{LayoutRegistry, SettingsInjector};
use crate::resolver::HostToolResolver;
use crate::settings::Settings;

/// Run install command
pub fn run(manifest: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let manifest_path = crate::project::manifest_path(manifest)?;
    let (project, chain) = Project::load_with_ancestors(&manifest_path)?;
    let settings = Settings::load_or_default(args.settings.as_deref())?;
    let registry = LayoutRegistry::standard();
    let local_repository = local_repo::local_repository(args.local_repo.as_deref())?;

    let resolver = HostToolResolver::new(&args.host_tool);
    let repository_system = SettingsInjector;
    let installer = Installer::new(&resolver, &repository_system);

    installer.install(
        &project,
        &chain,
        args.repositories.as_deref(),
        &settings,
        &registry,
        &local_repository,
        args.dry_run,
    )
}
