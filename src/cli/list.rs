use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List managed plugins:\n    plum list --host-version 3.9.6\n\n\
                  Include the JDK version each cached jar requires:\n    plum list --jdk-version\n\n\
                  Use a non-default local repository:\n    plum list --jdk-version --local-repo /build/m2")]
pub struct ListArgs {
    /// Append the minimum JDK version required by each locally cached jar
    #[arg(long = "jdk-version")]
    pub jdk_version: bool,

    /// Version of the host build tool plum runs against
    #[arg(long = "host-version", env = "PLUM_HOST_VERSION", value_name = "VERSION")]
    pub host_version: Option<String>,

    /// Local repository root (defaults to ~/.m2/repository)
    #[arg(long = "local-repo", value_name = "PATH")]
    pub local_repo: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_list_defaults() {
        let cli = Cli::try_parse_from(["plum", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert!(!args.jdk_version);
                assert_eq!(args.host_version, None);
                assert_eq!(args.local_repo, None);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_with_options() {
        let cli = Cli::try_parse_from([
            "plum",
            "list",
            "--jdk-version",
            "--host-version",
            "3.9.6",
            "--local-repo",
            "/build/m2",
        ])
        .unwrap();
        match cli.command {
            Commands::List(args) => {
                assert!(args.jdk_version);
                assert_eq!(args.host_version.as_deref(), Some("3.9.6"));
                assert_eq!(args.local_repo.as_deref(), Some(std::path::Path::new("/build/m2")));
            }
            _ => panic!("Expected List command"),
        }
    }
}
