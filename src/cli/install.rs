use clap::Parser;
use std::path::PathBuf;

use crate::resolver::host_tool::DEFAULT_HOST_TOOL;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Download all managed plugins:\n    plum install\n\n\
                  Add repositories (same format as the deploy tooling):\n    \
                  plum install --repositories central::default::https://repo.maven.apache.org/maven2,myrepo::::https://repo.acme.com\n\n\
                  Apply mirrors and credentials from a settings file:\n    plum install --settings ./settings.yaml\n\n\
                  Show what would be resolved:\n    plum install --dry-run")]
pub struct InstallArgs {
    /// Extra repositories as id::layout::url or plain URL, comma separated
    #[arg(long, value_name = "DESCRIPTORS")]
    pub repositories: Option<String>,

    /// Settings file with mirrors, proxies, and server credentials
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Host build tool command used to fetch artifacts
    #[arg(
        long = "host-tool",
        env = "PLUM_HOST_TOOL",
        default_value = DEFAULT_HOST_TOOL,
        value_name = "COMMAND"
    )]
    pub host_tool: String,

    /// Local repository root (defaults to ~/.m2/repository)
    #[arg(long = "local-repo", value_name = "PATH")]
    pub local_repo: Option<PathBuf>,

    /// Show what would be resolved without invoking the host tool
    #[arg(long)]
    pub dry_run: bool,
}
