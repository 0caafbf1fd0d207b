//! Repository layout kinds and their registry

use std::collections::BTreeMap;

/// A naming/path convention used by a repository to locate artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Default,
    Legacy,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Legacy => "legacy",
        }
    }
}

/// Registry of known layout names, built once at startup and passed to the
/// components that resolve layout identifiers.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: BTreeMap<String, Layout>,
}

impl LayoutRegistry {
    /// The standard registry: `default` and `legacy`.
    pub fn standard() -> Self {
        let mut layouts = BTreeMap::new();
        layouts.insert("default".to_string(), Layout::Default);
        layouts.insert("legacy".to_string(), Layout::Legacy);
        Self { layouts }
    }

    pub fn get(&self, name: &str) -> Option<Layout> {
        self.layouts.get(name).copied()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
