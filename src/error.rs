//! Error types and handling for plum
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Failure kinds mirror the operations: host-tool preconditions, repository
//! descriptor syntax, version resolution, artifact download, and the ambient
//! manifest/settings/IO plumbing. Jar probing never produces an error here;
//! it collapses to the `N/A` label inside [`crate::jdk`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plum operations
#[derive(Error, Diagnostic, Debug)]
pub enum PlumError {
    // Host tool preconditions
    #[error("Host build tool version is not set")]
    #[diagnostic(
        code(plum::host::version_missing),
        help(
            "Pass --host-version or set PLUM_HOST_VERSION to the version of the build tool plum runs against"
        )
    )]
    HostVersionMissing,

    #[error("This tool requires Maven 3.6.3 or later. Current version: {version}")]
    #[diagnostic(code(plum::host::version_too_old))]
    HostVersionTooOld { version: String },

    // Repository descriptor errors
    #[error("Invalid syntax for repository: {descriptor}")]
    #[diagnostic(
        code(plum::repository::invalid_syntax),
        help("Use \"id::layout::url\" or \"URL\"")
    )]
    InvalidRepositorySyntax { descriptor: String },

    #[error("Invalid repository layout: {layout}")]
    #[diagnostic(
        code(plum::repository::invalid_layout),
        help("Known layouts: default, legacy")
    )]
    InvalidRepositoryLayout { layout: String },

    // Coordinate errors
    #[error("Version not specified for plugin: {group}:{artifact}")]
    #[diagnostic(
        code(plum::resolve::version_not_specified),
        help("Declare a version on the entry or in the parent project's management section")
    )]
    VersionNotSpecified { group: String, artifact: String },

    #[error("Incomplete coordinate: {coordinate}")]
    #[diagnostic(code(plum::resolve::incomplete_coordinate))]
    IncompleteCoordinate { coordinate: String },

    // Artifact resolution errors
    #[error("Couldn't download artifact: {message}")]
    #[diagnostic(code(plum::resolve::download_failed))]
    DownloadFailed { message: String },

    // Manifest errors
    #[error("Project manifest not found: {path}")]
    #[diagnostic(
        code(plum::manifest::not_found),
        help("Run plum from a directory containing plum.yaml or pass --manifest")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse project manifest: {path}")]
    #[diagnostic(code(plum::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Manifest parent chain contains a cycle at: {path}")]
    #[diagnostic(code(plum::manifest::cycle))]
    ManifestCycle { path: String },

    // Settings errors
    #[error("Failed to read settings file: {path}")]
    #[diagnostic(code(plum::settings::read_failed))]
    SettingsReadFailed { path: String, reason: String },

    #[error("Failed to parse settings file: {path}")]
    #[diagnostic(code(plum::settings::parse_failed))]
    SettingsParseFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(plum::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PlumError {
    fn from(err: std::io::Error) -> Self {
        PlumError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PlumError>;
