//! Production resolver delegating artifact fetching to the host build tool
//!
//! plum never speaks to remote repositories itself; it invokes the host
//! tool's fetch goal (`dependency:get`) as a child process and lets it
//! populate the local repository, transitive closure included.

use std::process::{Command, Stdio};

use crate::coordinate::Coordinate;
use crate::error::{PlumError, Result};

use super::{DependencyResolver, ResolutionRequest};

/// Default host tool binary
pub const DEFAULT_HOST_TOOL: &str = "mvn";

pub struct HostToolResolver {
    command: String,
}

impl HostToolResolver {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Render the repository list back into the compact descriptor format the
    /// host tool accepts.
    fn remote_repositories_argument(request: &ResolutionRequest) -> Option<String> {
        if request.repositories.is_empty() {
            return None;
        }
        let descriptors: Vec<String> = request
            .repositories
            .iter()
            .map(|repository| {
                format!(
                    "{}::{}::{}",
                    repository.id,
                    repository.layout.as_str(),
                    repository.url
                )
            })
            .collect();
        Some(format!("-DremoteRepositories={}", descriptors.join(",")))
    }
}

impl DependencyResolver for HostToolResolver {
    fn resolve(&self, request: &ResolutionRequest, coordinate: &Coordinate) -> Result<()> {
        let mut command = Command::new(&self.command);
        command
            .arg("-B")
            .arg("dependency:get")
            .arg(format!("-Dartifact={coordinate}"))
            .arg("-Dtransitive=true")
            .arg(format!(
                "-Dmaven.repo.local={}",
                request.local_repository.display()
            ))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(repositories) = Self::remote_repositories_argument(request) {
            command.arg(repositories);
        }

        let output = command.output().map_err(|e| PlumError::DownloadFailed {
            message: format!("failed to run {}: {e}", self.command),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = last_line(&stderr)
                .or_else(|| last_line(&stdout))
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} exited with {}", self.command, output.status));
            return Err(PlumError::DownloadFailed {
                message: format!("{coordinate}: {detail}"),
            });
        }

        Ok(())
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|line| !line.is_empty())
}
