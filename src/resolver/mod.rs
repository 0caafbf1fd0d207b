//! Coordinate resolution
//!
//! This module covers the road from a management entry to resolved artifacts:
//! - `version.rs`: version inheritance from the immediate parent project
//! - `expand.rs`: expansion of an entry into its full coordinate set
//! - `host_tool.rs`: the production resolver delegating to the host build tool
//!
//! The external artifact service sits behind [`DependencyResolver`] so the
//! installer can be exercised without a host tool on PATH.

pub mod expand;
pub mod host_tool;
pub mod version;

pub use expand::expand;
pub use host_tool::HostToolResolver;
pub use version::resolve_version;

use std::path::PathBuf;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::repository::RepositoryDefinition;

/// A single resolution request: the assembled repository list and the local
/// repository the artifacts land in.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    pub repositories: Vec<RepositoryDefinition>,
    pub local_repository: PathBuf,
}

/// External artifact-resolution service. Fetches a coordinate and its
/// transitive closure into the local repository, or fails.
pub trait DependencyResolver {
    fn resolve(&self, request: &ResolutionRequest, coordinate: &Coordinate) -> Result<()>;
}
