//! Template name and path resolution.
//!
//! Resolution turns a layout (name + base) into an ordered list of candidate
//! entries and returns the first one that exists under the override root or
//! the base root.
//!
//! - [`candidates`] builds the candidate filenames
//! - [`locator`] combines them with search paths and checks the filesystem
//! - [`hooks`] holds the extension points both consult
//! - [`prefix`] reads the process-wide filename prefix
//!
//! # Example
//!
//! ```
//! use flexloc::resolve::{CandidateNameBuilder, Hooks, ResolveSettings};
//!
//! let settings = ResolveSettings::default().with_prefix("");
//! let hooks = Hooks::new();
//! let names = CandidateNameBuilder::new(&settings, &hooks).build("hero", Some("widget"));
//!
//! assert_eq!(names.names, vec!["widget-hero.php", "widget.php"]);
//! ```

pub mod candidates;
pub mod hooks;
pub mod locator;
pub mod prefix;

pub use candidates::{CandidateNameBuilder, CandidateNames};
pub use hooks::{HookChain, HookContext, HookFn, HookScope, Hooks};
pub use locator::{join_entry, TemplateLocator, TemplateRoots};
pub use prefix::{template_prefix, PREFIX_ENV};

/// Layout base used when none is given.
pub const DEFAULT_BASE: &str = "acf-flex-layout";

/// Template file extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "php";

/// Naming settings shared by candidate building and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    /// Base used for layouts without one; never subject to root-fallback
    /// exclusion.
    pub default_base: String,
    /// Template file extension, without the dot.
    pub extension: String,
    /// Filename prefix prepended to every candidate name.
    pub prefix: String,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            default_base: DEFAULT_BASE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            prefix: template_prefix().to_string(),
        }
    }
}

impl ResolveSettings {
    /// Replace the filename prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The base to resolve with: `base` unless absent or empty.
    pub fn effective_base<'a>(&'a self, base: Option<&'a str>) -> &'a str {
        match base {
            Some(b) if !b.is_empty() => b,
            _ => &self.default_base,
        }
    }
}
