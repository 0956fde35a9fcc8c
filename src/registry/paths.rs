//! Prioritized search-path registry.
//!
//! Search paths are stored per lookup key (usually a layout base) and per
//! priority. Lower priority numbers are searched first; paths sharing a
//! priority keep their registration order.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, warn};

/// Reserved key for paths that apply to every layout base.
pub const DEFAULT_KEY: &str = "_default";

/// Priority used by [`PathRegistry::register`] callers that do not pick one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Normalize a lookup key: absent or empty keys map to [`DEFAULT_KEY`].
pub fn normalize_key(key: Option<&str>) -> &str {
    match key {
        Some(k) if !k.is_empty() => k,
        _ => DEFAULT_KEY,
    }
}

/// Registry of search paths keyed by lookup key and priority.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    /// Physical root prefixes stripped from registered paths.
    root_prefixes: Vec<String>,
    /// key -> priority -> paths in registration order
    entries: HashMap<String, BTreeMap<i32, Vec<String>>>,
}

impl PathRegistry {
    /// Create a registry that strips the given override and base roots
    /// from every registered path.
    pub fn new(override_root: &Path, base_root: &Path) -> Self {
        let root_prefixes = [override_root, base_root]
            .iter()
            .map(|root| {
                root.to_string_lossy()
                    .trim_end_matches(['/', '\\'])
                    .to_string()
            })
            .filter(|root| !root.is_empty())
            .collect();

        Self {
            root_prefixes,
            entries: HashMap::new(),
        }
    }

    /// Strip the known root prefixes from a path.
    ///
    /// Roots are stripped repeatedly, in any order, until none matches; a
    /// prefix only matches on a path-segment boundary. Trailing separators
    /// are removed, so registering a root itself normalizes to the empty
    /// string. Normalizing twice is a no-op.
    pub fn normalize_path(&self, path: &str) -> String {
        let mut normalized = path.trim_end_matches(['/', '\\']);
        while let Some(rest) = self.strip_root(normalized) {
            normalized = rest.trim_end_matches(['/', '\\']);
        }
        normalized.to_string()
    }

    fn strip_root<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.root_prefixes.iter().find_map(|root| {
            path.strip_prefix(root.as_str())
                .filter(|rest| rest.is_empty() || rest.starts_with(['/', '\\']))
        })
    }

    /// Register a search path under `key` at `priority`.
    ///
    /// Paths that normalize to nothing (a physical root itself) are dropped.
    pub fn register(&mut self, path: &str, key: Option<&str>, priority: i32) {
        let normalized = self.normalize_path(path);
        if normalized.is_empty() {
            warn!(path, "Ignoring search path that resolves to a template root");
            return;
        }

        let key = normalize_key(key);
        debug!(key, priority, path = %normalized, "Registering search path");

        self.entries
            .entry(key.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(normalized);
    }

    /// All paths registered under `key`, ascending by priority.
    pub fn paths_for_key(&self, key: Option<&str>) -> Vec<String> {
        let key = normalize_key(key);
        self.entries
            .get(key)
            .map(|by_priority| by_priority.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// Paths for `key`, followed by the default key's paths when requested.
    ///
    /// No de-duplication happens: a path registered under both the key and
    /// the default key appears twice.
    pub fn paths_for_key_with_default(&self, key: Option<&str>, include_default: bool) -> Vec<String> {
        let mut paths = self.paths_for_key(key);
        if include_default {
            paths.extend(self.paths_for_key(Some(DEFAULT_KEY)));
        }
        paths
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registered path.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
