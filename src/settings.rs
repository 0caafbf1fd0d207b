//! Build-tool settings: mirrors, proxies, and server credentials
//!
//! Loaded from a YAML settings file when `--settings` is given; an absent
//! flag means empty settings. The records are injected into the assembled
//! repository list by [`crate::repository::SettingsInjector`].

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlumError, Result};

/// Settings records relevant to repository access
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mirrors: Vec<Mirror>,

    #[serde(default)]
    pub proxies: Vec<Proxy>,

    #[serde(default)]
    pub servers: Vec<Server>,
}

/// A mirror record: repositories matched by `mirror_of` are served from `url`
#[derive(Debug, Clone, Deserialize)]
pub struct Mirror {
    pub id: String,

    /// Matching expression: `*`, an exact repository id, or a comma list
    /// where `!id` excludes a repository from a wildcard match.
    #[serde(rename = "mirrorOf", alias = "mirror_of")]
    pub mirror_of: String,

    pub url: String,
}

impl Mirror {
    pub fn matches(&self, repository_id: &str) -> bool {
        let mut wildcard = false;
        for token in self.mirror_of.split(',').map(str::trim) {
            if let Some(excluded) = token.strip_prefix('!') {
                if excluded == repository_id {
                    return false;
                }
            } else if token == "*" {
                wildcard = true;
            } else if token == repository_id {
                return true;
            }
        }
        wildcard
    }
}

/// A proxy record applied to every repository when active
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Proxy {
    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default = "default_protocol")]
    pub protocol: String,

    pub host: String,
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, rename = "nonProxyHosts", alias = "non_proxy_hosts")]
    pub non_proxy_hosts: Option<String>,
}

fn default_active() -> bool {
    true
}

fn default_protocol() -> String {
    "http".to_string()
}

/// A server credential record matched to repositories by id
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub id: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PlumError::SettingsReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| PlumError::SettingsParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load from `path` when given, otherwise empty settings
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mirror(mirror_of: &str) -> Mirror {
        Mirror {
            id: "corp".to_string(),
            mirror_of: mirror_of.to_string(),
            url: "https://mirror.corp.example/maven2".to_string(),
        }
    }

    #[test]
    fn test_mirror_matches_exact_id() {
        assert!(mirror("central").matches("central"));
        assert!(!mirror("central").matches("snapshots"));
    }

    #[test]
    fn test_mirror_matches_wildcard() {
        assert!(mirror("*").matches("central"));
        assert!(mirror("*").matches("anything"));
    }

    #[test]
    fn test_mirror_wildcard_with_exclusion() {
        let m = mirror("*, !snapshots");
        assert!(m.matches("central"));
        assert!(!m.matches("snapshots"));
    }

    #[test]
    fn test_mirror_comma_list() {
        let m = mirror("central, releases");
        assert!(m.matches("central"));
        assert!(m.matches("releases"));
        assert!(!m.matches("snapshots"));
    }

    #[test]
    fn test_load_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        fs::write(
            &path,
            r#"
mirrors:
  - id: corp
    mirrorOf: "*"
    url: https://mirror.corp.example/maven2
proxies:
  - host: proxy.corp.example
    port: 3128
servers:
  - id: corp
    username: ci
    password: hunter2
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.mirrors.len(), 1);
        assert!(settings.proxies[0].active);
        assert_eq!(settings.proxies[0].protocol, "http");
        assert_eq!(settings.servers[0].username.as_deref(), Some("ci"));
    }

    #[test]
    fn test_load_missing_settings_file() {
        let temp = TempDir::new().unwrap();
        let err = Settings::load(&temp.path().join("settings.yaml")).unwrap_err();
        assert!(matches!(err, PlumError::SettingsReadFailed { .. }));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let settings = Settings::load_or_default(None).unwrap();
        assert!(settings.mirrors.is_empty());
        assert!(settings.proxies.is_empty());
        assert!(settings.servers.is_empty());
    }
}
