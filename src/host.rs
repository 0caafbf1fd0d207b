//! Host build-tool version precondition

use semver::Version;

use crate::error::{PlumError, Result};

/// Validate the host tool version before any reporting begins. A missing
/// version is its own error; an unparseable one logs a warning and fails the
/// same way a too-old version does.
pub fn ensure_supported(version: Option<&str>) -> Result<()> {
    let Some(version) = version else {
        return Err(PlumError::HostVersionMissing);
    };
    if !is_supported(version) {
        return Err(PlumError::HostVersionTooOld {
            version: version.to_string(),
        });
    }
    Ok(())
}

fn is_supported(version: &str) -> bool {
    match Version::parse(version.trim()) {
        Ok(current) => current >= Version::new(3, 6, 3),
        Err(_) => {
            eprintln!("Warning: failed to parse host tool version: {version}");
            false
        }
    }
}
