//! Version inheritance for version-less management entries

use crate::error::{PlumError, Result};
use crate::project::{AncestorChain, ManagementEntry};

/// Resolve the concrete version for a management entry.
///
/// A declared version wins unconditionally. Otherwise only the immediate
/// parent's management list is consulted; deeper ancestors are not searched.
/// An entry with no parent fails the same way as one the parent does not
/// declare.
pub fn resolve_version(entry: &ManagementEntry, chain: &AncestorChain) -> Result<String> {
    if let Some(version) = entry.version.as_deref() {
        if !version.is_empty() {
            return Ok(version.to_string());
        }
    }

    chain
        .parent()
        .and_then(|parent| {
            parent.management.iter().find(|candidate| {
                candidate.group == entry.group && candidate.artifact == entry.artifact
            })
        })
        .and_then(|candidate| candidate.version.clone())
        .filter(|version| !version.is_empty())
        .ok_or_else(|| PlumError::VersionNotSpecified {
            group: entry.group.clone(),
            artifact: entry.artifact.clone(),
        })
}
