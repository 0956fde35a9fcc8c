//! Configuration schema definitions for flexloc.
//!
//! This module contains the struct definitions that map to the
//! `.flexloc/config.yml` file format.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::registry::DEFAULT_PRIORITY;
use crate::resolve::{DEFAULT_BASE, DEFAULT_EXTENSION};

/// Root configuration structure for `.flexloc/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexlocConfig {
    /// Physical template roots
    pub roots: RootsConfig,

    /// Naming settings
    pub settings: Settings,

    /// Registered search paths
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<SearchPathConfig>,

    /// Per-base extension-point values
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub layouts: BTreeMap<String, LayoutBaseConfig>,

    /// Host bindings exposed to every template
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub ambient: Mapping,
}

/// The override (child) and base (parent) template roots.
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootsConfig {
    /// Checked first; defaults to the base root
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_root: Option<PathBuf>,

    /// Checked second
    pub base: PathBuf,
}

/// Global naming settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Layout base used when none is given
    pub default_base: String,

    /// Template file extension, without the dot
    pub extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_base: DEFAULT_BASE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// One registered search path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPathConfig {
    /// Directory, relative to the template roots
    pub path: String,

    /// Lookup key (layout base); `_default` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Lower is searched first
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// Declarative extension-point values for one layout base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutBaseConfig {
    /// Emit the `{base}/{name}` candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<bool>,

    /// Keep the bare `{base}` name out of the root fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_root_fallback: Option<bool>,

    /// Layout name rewrites: requested name -> effective name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
roots:
  override: child
  base: parent
settings:
  default_base: block
  extension: html
search_paths:
  - path: layouts
    key: widget
    priority: 5
  - path: shared
layouts:
  widget:
    subdirectory: true
    aliases:
      old-hero: hero
ambient:
  site_name: Example
"#;
        let config: FlexlocConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.roots.override_root, Some(PathBuf::from("child")));
        assert_eq!(config.roots.base, PathBuf::from("parent"));
        assert_eq!(config.settings.default_base, "block");
        assert_eq!(config.search_paths[0].priority, 5);
        assert_eq!(config.search_paths[1].key, None);
        assert_eq!(config.search_paths[1].priority, DEFAULT_PRIORITY);
        assert_eq!(config.layouts["widget"].subdirectory, Some(true));
        assert_eq!(config.layouts["widget"].exclude_root_fallback, None);
        assert_eq!(config.layouts["widget"].aliases["old-hero"], "hero");
        assert_eq!(config.ambient["site_name"], "Example");
    }

    #[test]
    fn settings_default_when_omitted() {
        let config: FlexlocConfig = serde_yaml::from_str("roots:\n  base: theme\n").unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.roots.override_root.is_none());
        assert!(config.search_paths.is_empty());
    }

    #[test]
    fn serializes_without_empty_sections() {
        let config = FlexlocConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("search_paths"));
        assert!(!yaml.contains("layouts"));
        assert!(!yaml.contains("override"));
    }
}
