//! Local artifact repository location and per-coordinate paths

use std::path::{Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::{PlumError, Result};

/// Environment variable overriding the local repository location
pub const LOCAL_REPO_ENV: &str = "PLUM_LOCAL_REPO";

/// Default local repository under the user's home directory
const DEFAULT_LOCAL_REPO: &str = ".m2/repository";

/// Resolve the local repository root: explicit flag, then the
/// `PLUM_LOCAL_REPO` environment variable, then `~/.m2/repository`.
pub fn local_repository(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(LOCAL_REPO_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or_else(|| PlumError::IoError {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join(DEFAULT_LOCAL_REPO))
}

/// Conventional jar path for a coordinate: group segments (split on `.`),
/// then artifact, version, and `artifact-version.jar`.
pub fn artifact_jar_path(local_repository: &Path, coordinate: &Coordinate) -> PathBuf {
    let mut path = local_repository.to_path_buf();
    for segment in coordinate.group.split('.') {
        path.push(segment);
    }
    path.push(&coordinate.artifact);
    path.push(&coordinate.version);
    path.push(format!(
        "{}-{}.jar",
        coordinate.artifact, coordinate.version
    ));
    path
}
