//! Minimum JDK version probing for packaged jars
//!
//! Scans every compiled class inside a jar and keeps the highest class-file
//! major version, mapped to the JDK release able to run it. The probe never
//! fails: a missing or unreadable archive, a jar without classes, or an I/O
//! error mid-scan all collapse to the `N/A` label so a listing is never
//! aborted by one artifact that simply has not been downloaded yet.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipResult;

/// Entry suffix identifying compiled units inside an archive
const CLASS_SUFFIX: &str = ".class";

/// Label returned when no version can be determined
pub const UNAVAILABLE: &str = "N/A";

/// Class-file major versions mapped to JDK release labels
const VERSION_LABELS: &[(u16, &str)] = &[
    (52, "JDK 8"),
    (53, "JDK 9"),
    (54, "JDK 10"),
    (55, "JDK 11"),
    (56, "JDK 12"),
    (57, "JDK 13"),
    (58, "JDK 14"),
    (59, "JDK 15"),
    (60, "JDK 16"),
    (61, "JDK 17"),
    (62, "JDK 18"),
    (63, "JDK 19"),
    (64, "JDK 20"),
    (65, "JDK 21"),
];

/// Determine the minimum JDK release able to run the archive at `jar_path`.
pub fn minimum_jdk_version(jar_path: &Path) -> String {
    match max_class_major_version(jar_path) {
        Ok(Some(major)) => label_for(major),
        Ok(None) | Err(_) => UNAVAILABLE.to_string(),
    }
}

fn label_for(major: u16) -> String {
    VERSION_LABELS
        .iter()
        .find(|(version, _)| *version == major)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Unknown version: {major}"))
}

/// Highest class-file major version across all compiled units, or `None` when
/// the archive holds none. Any archive or I/O error aborts the whole scan.
fn max_class_major_version(jar_path: &Path) -> ZipResult<Option<u16>> {
    let file = File::open(jar_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut max_major = None;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.name().ends_with(CLASS_SUFFIX) {
            continue;
        }

        // 4-byte magic (not validated), 2-byte minor, 2-byte major, big endian
        let mut header = [0u8; 8];
        entry.read_exact(&mut header)?;
        let major = u16::from_be_bytes([header[6], header[7]]);
        if max_major.is_none_or(|current| major > current) {
            max_major = Some(major);
        }
    }

    Ok(max_major)
}
