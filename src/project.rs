//! Project manifest model
//!
//! plum operates on a read-only project tree: a `plum.yaml` manifest plus the
//! ancestors reachable through its `parent:` link. The tree is loaded once at
//! the start of each command and never written back.
//!
//! ```yaml
//! name: my-app
//! parent: ../plum.yaml
//! management:
//!   - group: org.acme
//!     artifact: plugin
//!     version: "1.0"
//!     executions:
//!       - id: default
//!         phase: verify
//!         goals: [check]
//!     dependencies:
//!       - group: org.acme
//!         artifact: helper
//!         version: "2.0"
//! repositories:
//!   - id: central
//!     url: https://repo.maven.apache.org/maven2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PlumError, Result};
use crate::repository::{LayoutRegistry, RepositoryDefinition, RepositoryPolicy};

/// Project manifest filename
pub const MANIFEST_FILE: &str = "plum.yaml";

/// A project snapshot read from a manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    /// Project name, informational only
    #[serde(default)]
    pub name: Option<String>,

    /// Path to the parent manifest, relative to this manifest's directory
    #[serde(default)]
    pub parent: Option<PathBuf>,

    /// Plugin-management entries in declared order
    #[serde(default)]
    pub management: Vec<ManagementEntry>,

    /// Repositories declared by the project
    #[serde(default)]
    pub repositories: Vec<DeclaredRepository>,
}

/// A declared plugin/dependency template, possibly version-less
#[derive(Debug, Clone, Deserialize)]
pub struct ManagementEntry {
    pub group: String,
    pub artifact: String,

    /// Absent means "inherit from the parent project"
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub executions: Vec<ExecutionBinding>,

    #[serde(default)]
    pub dependencies: Vec<SubDependency>,
}

impl ManagementEntry {
    /// Identity key without a version, e.g. `org.acme:plugin`
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

/// An execution binding on a management entry
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionBinding {
    pub id: String,

    #[serde(default)]
    pub phase: Option<String>,

    #[serde(default)]
    pub goals: Vec<String>,
}

/// A sub-dependency declared on a management entry
#[derive(Debug, Clone, Deserialize)]
pub struct SubDependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

/// A repository declared in the manifest's `repositories:` section
#[derive(Debug, Clone, Deserialize)]
pub struct DeclaredRepository {
    pub id: String,

    #[serde(default = "default_layout_name")]
    pub layout: String,

    pub url: String,
}

fn default_layout_name() -> String {
    "default".to_string()
}

impl DeclaredRepository {
    /// Resolve the declared layout name against the registry and build a
    /// definition with the default access policy.
    pub fn to_definition(&self, registry: &LayoutRegistry) -> Result<RepositoryDefinition> {
        let layout = registry.get(&self.layout).ok_or_else(|| {
            PlumError::InvalidRepositoryLayout {
                layout: self.layout.clone(),
            }
        })?;
        RepositoryDefinition::new(&self.id, layout, &self.url, RepositoryPolicy::default())
    }
}

/// Ancestor projects ordered nearest parent first.
///
/// The chain is a finite, acyclic snapshot taken at load time; version
/// resolution consults only its head.
#[derive(Debug, Default)]
pub struct AncestorChain {
    projects: Vec<Project>,
}

impl AncestorChain {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The immediate parent project, if any
    pub fn parent(&self) -> Option<&Project> {
        self.projects.first()
    }

    #[allow(dead_code)] // Used by tests
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Project {
    /// Load a single manifest
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlumError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| PlumError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| PlumError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load a manifest together with every ancestor reachable through
    /// `parent:` links. A manifest path repeating in the chain is a cycle.
    pub fn load_with_ancestors(path: &Path) -> Result<(Self, AncestorChain)> {
        let project = Self::load(path)?;

        let mut seen = vec![identity_path(path)];
        let mut ancestors = Vec::new();
        let mut current_dir = manifest_dir(path);
        let mut next_parent = project.parent.clone();

        while let Some(relative) = next_parent {
            let manifest_path = current_dir.join(relative);
            let identity = identity_path(&manifest_path);
            if seen.contains(&identity) {
                return Err(PlumError::ManifestCycle {
                    path: manifest_path.display().to_string(),
                });
            }
            seen.push(identity);

            let ancestor = Self::load(&manifest_path)?;
            current_dir = manifest_dir(&manifest_path);
            next_parent = ancestor.parent.clone();
            ancestors.push(ancestor);
        }

        Ok((project, AncestorChain::new(ancestors)))
    }
}

/// Manifest path from the CLI flag or `plum.yaml` in the current directory
pub fn manifest_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map(|dir| dir.join(MANIFEST_FILE))
            .map_err(|e| PlumError::IoError {
                message: format!("Failed to get current directory: {e}"),
            }),
    }
}

/// Stable identity for cycle detection; falls back to the raw path when the
/// file does not exist yet (the subsequent load reports that cleanly).
fn identity_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn manifest_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_manifest() {
        let yaml = r#"
name: my-app
management:
  - group: org.acme
    artifact: plugin
    version: "1.0"
    executions:
      - id: default
        phase: verify
        goals: [check, report]
    dependencies:
      - group: org.acme
        artifact: helper
        version: "2.0"
repositories:
  - id: central
    url: https://repo.maven.apache.org/maven2
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.name.as_deref(), Some("my-app"));
        assert_eq!(project.management.len(), 1);

        let entry = &project.management[0];
        assert_eq!(entry.key(), "org.acme:plugin");
        assert_eq!(entry.version.as_deref(), Some("1.0"));
        assert_eq!(entry.executions[0].goals, vec!["check", "report"]);
        assert_eq!(entry.dependencies[0].version, "2.0");

        assert_eq!(project.repositories[0].layout, "default");
    }

    #[test]
    fn test_parse_manifest_version_optional() {
        let yaml = r#"
management:
  - group: org.acme
    artifact: plugin
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.management[0].version, None);
        assert!(project.management[0].executions.is_empty());
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = Project::load(&temp.path().join("plum.yaml")).unwrap_err();
        assert!(matches!(err, PlumError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_load_with_ancestors_follows_parent() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "parent.yaml",
            r#"
management:
  - group: org.acme
    artifact: plugin
    version: "2.3"
"#,
        );
        let child = write(
            temp.path(),
            "plum.yaml",
            r#"
parent: parent.yaml
management:
  - group: org.acme
    artifact: plugin
"#,
        );

        let (project, chain) = Project::load_with_ancestors(&child).unwrap();
        assert_eq!(project.management.len(), 1);
        assert_eq!(chain.len(), 1);
        assert_eq!(
            chain.parent().unwrap().management[0].version.as_deref(),
            Some("2.3")
        );
    }

    #[test]
    fn test_load_with_ancestors_multiple_levels() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "root.yaml", "name: root\n");
        write(temp.path(), "mid.yaml", "name: mid\nparent: root.yaml\n");
        let leaf = write(temp.path(), "plum.yaml", "name: leaf\nparent: mid.yaml\n");

        let (_, chain) = Project::load_with_ancestors(&leaf).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.parent().unwrap().name.as_deref(), Some("mid"));
    }

    #[test]
    fn test_load_with_ancestors_detects_cycle() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.yaml", "parent: b.yaml\n");
        write(temp.path(), "b.yaml", "parent: a.yaml\n");

        let err = Project::load_with_ancestors(&temp.path().join("a.yaml")).unwrap_err();
        assert!(matches!(err, PlumError::ManifestCycle { .. }));
    }

    #[test]
    fn test_no_parent_yields_empty_chain() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "plum.yaml", "name: lonely\n");
        let (_, chain) = Project::load_with_ancestors(&path).unwrap();
        assert!(chain.is_empty());
        assert!(chain.parent().is_none());
    }
}
