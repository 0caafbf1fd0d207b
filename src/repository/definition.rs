//! Repository definitions and access policies

#![allow(dead_code)]

use crate::error::{PlumError, Result};
use crate::settings::Proxy;

use super::layout::Layout;

/// Sentinel id for repositories given as a bare URL
pub const TEMP_REPOSITORY_ID: &str = "temp";

/// How often cached metadata for a repository is refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    Always,
    Daily,
    Never,
}

/// What to do when a downloaded artifact fails its checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumPolicy {
    Fail,
    Warn,
    Ignore,
}

/// Access policy applied uniformly to a parsed repository list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryPolicy {
    pub enabled: bool,
    pub updates: UpdatePolicy,
    pub checksums: ChecksumPolicy,
}

impl RepositoryPolicy {
    /// Policy for repositories supplied on the command line: always refresh,
    /// warn on checksum mismatch.
    pub fn always_update_warn() -> Self {
        Self {
            enabled: true,
            updates: UpdatePolicy::Always,
            checksums: ChecksumPolicy::Warn,
        }
    }
}

impl Default for RepositoryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            updates: UpdatePolicy::Daily,
            checksums: ChecksumPolicy::Warn,
        }
    }
}

/// Credentials attached to a repository by settings injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A single remote repository: identifier, layout kind, and endpoint.
///
/// `mirror_of`, `proxy`, and `credentials` stay empty until the repository
/// system injects settings records into the assembled list.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryDefinition {
    pub id: String,
    pub layout: Layout,
    pub url: String,
    pub policy: RepositoryPolicy,

    /// Id of the settings mirror now serving this repository, if any
    pub mirror_of: Option<String>,
    pub proxy: Option<Proxy>,
    pub credentials: Option<Credentials>,
}

impl RepositoryDefinition {
    /// Build a definition. The endpoint is required and non-empty.
    pub fn new(id: &str, layout: Layout, url: &str, policy: RepositoryPolicy) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(PlumError::InvalidRepositorySyntax {
                descriptor: format!("{id}::{}::{url}", layout.as_str()),
            });
        }
        Ok(Self {
            id: id.to_string(),
            layout,
            url: url.to_string(),
            policy,
            mirror_of: None,
            proxy: None,
            credentials: None,
        })
    }
}
