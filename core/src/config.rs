//! Listing configuration, passed explicitly into the orchestrator.
//!
//! Nothing in the engine reads ambient/global state: every knob that shapes
//! a listing (cache TTL, sort direction, named filters, exclusion rules)
//! travels through a [`ListingConfig`] value handed in at call time.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::types::SortDirection;

/// Names the engine refuses to list, on top of the built-in dotfile rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExclusionRules {
    /// Lowercase extensions (without the dot) rejected for files.
    pub extensions: HashSet<String>,
    /// Basenames rejected when the entry is a directory.
    pub folder_names: HashSet<String>,
    /// Basenames rejected when the entry is a file.
    pub file_names: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingConfig {
    /// Backend identifier folded into every entry id.
    pub disk: String,
    /// Cache TTL in seconds; `None` or 0 disables the cache gate.
    pub cache_ttl_secs: Option<u64>,
    pub direction: SortDirection,
    /// Named filter table: filter key to the set of allowed extensions.
    pub filters: HashMap<String, HashSet<String>>,
    pub exclusions: ExclusionRules,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            disk: "local".to_string(),
            cache_ttl_secs: None,
            direction: SortDirection::Asc,
            filters: HashMap::new(),
            exclusions: ExclusionRules::default(),
        }
    }
}

impl ListingConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading listing config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing listing config at {}", path.display()))
    }

    /// Effective cache TTL; a configured 0 counts as disabled.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    /// Allowed-extension set for a named filter, if configured.
    pub fn filter(&self, key: &str) -> Option<&HashSet<String>> {
        self.filters.get(key)
    }
}
