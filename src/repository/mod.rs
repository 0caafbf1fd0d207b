//! Repository definitions and the compact descriptor parser
//!
//! This module covers everything repository-shaped:
//! - `definition.rs`: repository definitions and access policies
//! - `layout.rs`: the closed set of known layout kinds and their registry
//! - `spec.rs`: parsing of compact `id::layout::url` descriptors
//! - `system.rs`: settings-derived mirror/proxy/credential injection

pub mod definition;
pub mod layout;
pub mod spec;
pub mod system;

pub use definition::{
    ChecksumPolicy, Credentials, RepositoryDefinition, RepositoryPolicy, UpdatePolicy,
};
pub use layout::{Layout, LayoutRegistry};
pub use spec::{parse, parse_list};
pub use system::{RepositorySystem, SettingsInjector};
