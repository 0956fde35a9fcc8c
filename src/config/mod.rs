//! Configuration loading, parsing, and validation for flexloc.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use flexloc::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".flexloc");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "roots:\n  base: theme\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.extension, "php");
//! ```
//!
//! # Configuration File Locations
//!
//! flexloc discovers and merges configuration in this order:
//! 1. User global config (`~/.flexloc/config.yml`)
//! 2. Project config (`.flexloc/config.yml`)
//! 3. Local overrides (`.flexloc/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{FlexlocConfig, LayoutBaseConfig, RootsConfig, SearchPathConfig, Settings};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
