//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::FlexlocConfig;
use crate::error::{FlexlocError, Result};

/// Directory holding flexloc configuration, in the project and home dirs.
pub const CONFIG_DIR: &str = ".flexloc";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.flexloc/config.yml`)
/// 2. Project config (`.flexloc/config.yml`)
/// 3. Local overrides (`.flexloc/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.flexloc/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .flexloc/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .flexloc/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir().and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.flexloc` directory, then falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlexlocError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FlexlocError::Io(e)
        }
    })
}

/// Load a single config file and parse it into FlexlocConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FlexlocConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into FlexlocConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FlexlocConfig> {
    serde_yaml::from_str(content).map_err(|e| FlexlocError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    serde_yaml::from_str(&content).map_err(|e| FlexlocError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<FlexlocConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_project_config() {
        return Err(FlexlocError::ConfigNotFound {
            path: project_root.join(CONFIG_DIR).join("config.yml"),
        });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        debug!(path = %path.display(), "Loading config layer");
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| FlexlocError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<FlexlocConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
