//! Search-path registry for flexloc.
//!
//! Callers register directories (relative to the template roots) under a
//! lookup key, normally a layout base, and a numeric priority. Resolution
//! asks for the flattened, priority-ordered list of a key, optionally
//! followed by the paths registered under the reserved default key.
//!
//! # Example
//!
//! ```
//! use flexloc::registry::PathRegistry;
//! use std::path::Path;
//!
//! let mut registry = PathRegistry::new(Path::new("/srv/child"), Path::new("/srv/parent"));
//! registry.register("/srv/child/layouts", Some("widget"), 20);
//! registry.register("partials", Some("widget"), 10);
//! registry.register("shared", None, 10);
//!
//! assert_eq!(
//!     registry.paths_for_key_with_default(Some("widget"), true),
//!     vec!["partials", "/layouts", "shared"]
//! );
//! ```

pub mod paths;

pub use paths::{normalize_key, PathRegistry, DEFAULT_KEY, DEFAULT_PRIORITY};
