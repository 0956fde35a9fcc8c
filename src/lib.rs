//! flexloc - Layered template resolution for flexible-content layouts.
//!
//! A layout is identified by a name and a layout base. flexloc turns that
//! pair into an ordered list of candidate template paths, checks them
//! against an override (child) root and a base (parent) root, and loads the
//! first one that exists with the layout's options bound as named values.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`engine`] - The [`LayoutEngine`] tying everything together
//! - [`error`] - Error types and result aliases
//! - [`loader`] - Loading located templates, overrides, bindings
//! - [`registry`] - Prioritized search-path registry
//! - [`render`] - Layout records and bulk rendering support
//! - [`resolve`] - Candidate names, path assembly, extension points
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use flexloc::{LayoutEngine, TemplateRoots};
//! use flexloc::render::LayoutRecord;
//! use flexloc::loader::mapping_from;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let theme = TempDir::new().unwrap();
//! fs::write(theme.path().join("block-quote.php"), "> ${text}\n").unwrap();
//!
//! let engine = LayoutEngine::new(TemplateRoots::single(theme.path())).with_prefix("");
//! let records = vec![
//!     LayoutRecord::new(mapping_from([("type", "quote"), ("text", "first")])),
//!     LayoutRecord::new(mapping_from([("type", "quote"), ("text", "second")])),
//! ];
//!
//! let mut out = Vec::new();
//! let captured = engine.render_layouts(&records, Some("block"), true, &mut out).unwrap();
//! assert_eq!(captured["quote"], "> first\n");
//! assert_eq!(captured["quote_"], "> second\n");
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod ui;

pub use engine::{FindOptions, LayoutEngine};
pub use error::{FlexlocError, Result};
pub use resolve::{CandidateNames, HookScope, TemplateRoots};
