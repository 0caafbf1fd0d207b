//! Expansion of a management entry into its full coordinate set

use std::collections::BTreeSet;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::project::{AncestorChain, ManagementEntry};

use super::version::resolve_version;

/// Expand a management entry into the coordinates to resolve: the entry
/// itself (version-resolved through the ancestor chain) plus one coordinate
/// per declared sub-dependency using that sub-dependency's own version.
/// Duplicates collapse by full coordinate identity.
pub fn expand(entry: &ManagementEntry, chain: &AncestorChain) -> Result<BTreeSet<Coordinate>> {
    let mut coordinates = BTreeSet::new();

    let version = resolve_version(entry, chain)?;
    coordinates.insert(Coordinate::new(&entry.group, &entry.artifact, &version)?);

    for dependency in &entry.dependencies {
        coordinates.insert(Coordinate::new(
            &dependency.group,
            &dependency.artifact,
            &dependency.version,
        )?);
    }

    Ok(coordinates)
}
