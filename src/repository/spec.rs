//! Compact repository descriptor parsing
//!
//! A descriptor is either a bare URL or `id::layout::url`, the same format
//! other deployment tooling accepts. The layout segment may be empty, meaning
//! `default`. Lists are comma separated:
//!
//! ```text
//! central::default::https://repo.maven.apache.org/maven2,myrepo::::https://repo.acme.com,https://repo.acme2.com
//! ```

use crate::error::{PlumError, Result};

use super::definition::{RepositoryDefinition, RepositoryPolicy, TEMP_REPOSITORY_ID};
use super::layout::{Layout, LayoutRegistry};

const SEPARATOR: &str = "::";

/// Parse one descriptor into a repository definition carrying `policy`.
pub fn parse(
    descriptor: &str,
    policy: RepositoryPolicy,
    registry: &LayoutRegistry,
) -> Result<RepositoryDefinition> {
    let descriptor = descriptor.trim();

    if !descriptor.contains(SEPARATOR) {
        // a simple url
        if descriptor.is_empty() {
            return Err(syntax_error(descriptor));
        }
        return RepositoryDefinition::new(TEMP_REPOSITORY_ID, Layout::Default, descriptor, policy);
    }

    // an extended repo descriptor of the form id::layout::url
    let segments: Vec<&str> = descriptor.split(SEPARATOR).collect();
    let (id, layout_name, url) = match segments.as_slice() {
        [id, layout, url] => (id.trim(), layout.trim(), url.trim()),
        _ => return Err(syntax_error(descriptor)),
    };

    if id.is_empty() || url.is_empty() {
        return Err(syntax_error(descriptor));
    }

    let layout = if layout_name.is_empty() {
        Layout::Default
    } else {
        registry
            .get(layout_name)
            .ok_or_else(|| PlumError::InvalidRepositoryLayout {
                layout: layout_name.to_string(),
            })?
    };

    RepositoryDefinition::new(id, layout, url, policy)
}

/// Parse a comma-separated descriptor list; every definition carries the same
/// policy. The first malformed descriptor fails the whole list.
pub fn parse_list(
    descriptors: &str,
    policy: RepositoryPolicy,
    registry: &LayoutRegistry,
) -> Result<Vec<RepositoryDefinition>> {
    descriptors
        .split(',')
        .map(|descriptor| parse(descriptor, policy, registry))
        .collect()
}

fn syntax_error(descriptor: &str) -> PlumError {
    PlumError::InvalidRepositorySyntax {
        descriptor: descriptor.to_string(),
    }
}
