//! Settings-derived mirror, proxy, and credential injection

use crate::settings::{Mirror, Proxy, Server};

use super::definition::{Credentials, RepositoryDefinition};

/// Applies settings records to an assembled repository list as a single
/// batch, before any resolution request is made. Implemented in production by
/// [`SettingsInjector`]; tests substitute recording fakes.
pub trait RepositorySystem {
    fn inject_mirror(&self, repositories: &mut [RepositoryDefinition], mirrors: &[Mirror]);
    fn inject_proxy(&self, repositories: &mut [RepositoryDefinition], proxies: &[Proxy]);
    fn inject_authentication(&self, repositories: &mut [RepositoryDefinition], servers: &[Server]);
}

/// Production repository system backed by the loaded settings records
pub struct SettingsInjector;

impl RepositorySystem for SettingsInjector {
    fn inject_mirror(&self, repositories: &mut [RepositoryDefinition], mirrors: &[Mirror]) {
        for repository in repositories.iter_mut() {
            if let Some(mirror) = mirrors.iter().find(|m| m.matches(&repository.id)) {
                repository.url = mirror.url.clone();
                repository.mirror_of = Some(mirror.id.clone());
            }
        }
    }

    fn inject_proxy(&self, repositories: &mut [RepositoryDefinition], proxies: &[Proxy]) {
        let Some(proxy) = proxies.iter().find(|p| p.active) else {
            return;
        };
        for repository in repositories.iter_mut() {
            repository.proxy = Some(proxy.clone());
        }
    }

    fn inject_authentication(&self, repositories: &mut [RepositoryDefinition], servers: &[Server]) {
        for repository in repositories.iter_mut() {
            if let Some(server) = servers.iter().find(|s| s.id == repository.id) {
                repository.credentials = Some(Credentials {
                    username: server.username.clone(),
                    password: server.password.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{Layout, RepositoryPolicy};

    fn repo(id: &str, url: &str) -> RepositoryDefinition {
        RepositoryDefinition::new(id, Layout::Default, url, RepositoryPolicy::default()).unwrap()
    }

    fn mirror(id: &str, mirror_of: &str, url: &str) -> Mirror {
        Mirror {
            id: id.to_string(),
            mirror_of: mirror_of.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_inject_mirror_replaces_matched_url() {
        let mut repos = vec![repo("central", "https://repo1"), repo("other", "https://repo2")];
        let mirrors = vec![mirror("corp", "central", "https://mirror")];

        SettingsInjector.inject_mirror(&mut repos, &mirrors);

        assert_eq!(repos[0].url, "https://mirror");
        assert_eq!(repos[0].mirror_of.as_deref(), Some("corp"));
        assert_eq!(repos[1].url, "https://repo2");
        assert!(repos[1].mirror_of.is_none());
    }

    #[test]
    fn test_inject_mirror_wildcard_with_exclusion() {
        let mut repos = vec![repo("central", "https://repo1"), repo("snapshots", "https://repo2")];
        let mirrors = vec![mirror("corp", "*, !snapshots", "https://mirror")];

        SettingsInjector.inject_mirror(&mut repos, &mirrors);

        assert_eq!(repos[0].url, "https://mirror");
        assert_eq!(repos[1].url, "https://repo2");
    }

    #[test]
    fn test_inject_proxy_applies_first_active() {
        let mut repos = vec![repo("central", "https://repo1")];
        let proxies = vec![
            Proxy {
                active: false,
                protocol: "http".to_string(),
                host: "inactive.example".to_string(),
                port: 8080,
                username: None,
                password: None,
                non_proxy_hosts: None,
            },
            Proxy {
                active: true,
                protocol: "http".to_string(),
                host: "proxy.example".to_string(),
                port: 3128,
                username: None,
                password: None,
                non_proxy_hosts: None,
            },
        ];

        SettingsInjector.inject_proxy(&mut repos, &proxies);

        assert_eq!(repos[0].proxy.as_ref().map(|p| p.host.as_str()), Some("proxy.example"));
    }

    #[test]
    fn test_inject_authentication_by_server_id() {
        let mut repos = vec![repo("central", "https://repo1"), repo("corp", "https://repo2")];
        let servers = vec![Server {
            id: "corp".to_string(),
            username: Some("ci".to_string()),
            password: Some("hunter2".to_string()),
        }];

        SettingsInjector.inject_authentication(&mut repos, &servers);

        assert!(repos[0].credentials.is_none());
        let credentials = repos[1].credentials.as_ref().unwrap();
        assert_eq!(credentials.username.as_deref(), Some("ci"));
    }
}
