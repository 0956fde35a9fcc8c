//! Candidate filename construction.
//!
//! For a layout name and base the builder produces, in order:
//!
//! 1. `{prefix}{base}/{name}.{ext}` when the subdirectory form is enabled
//! 2. `{prefix}{base}-{name}.{ext}`
//! 3. `{prefix}{base}.{ext}` (the root-fallback candidate)
//!
//! and then lets the `candidate_names` extension point rewrite the list.

use tracing::debug;

use super::hooks::{HookContext, Hooks};
use super::ResolveSettings;

/// Ordered candidate filenames for one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNames {
    /// Effective layout name (after the name rewrite hooks).
    pub layout_name: String,
    /// Effective layout base (the default base when none was given).
    pub layout_base: String,
    /// Candidate filenames, most preferred first.
    pub names: Vec<String>,
    /// The bare `{prefix}{base}.{ext}` name, when built by
    /// [`CandidateNameBuilder`]. It may be excluded from root fallback.
    pub root_fallback: Option<String>,
}

impl CandidateNames {
    /// Wrap a caller-supplied list of names.
    pub fn from_names(
        names: Vec<String>,
        layout_name: impl Into<String>,
        layout_base: impl Into<String>,
    ) -> Self {
        Self {
            layout_name: layout_name.into(),
            layout_base: layout_base.into(),
            names,
            root_fallback: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds [`CandidateNames`] from a layout name and base.
#[derive(Debug, Clone, Copy)]
pub struct CandidateNameBuilder<'a> {
    settings: &'a ResolveSettings,
    hooks: &'a Hooks,
}

impl<'a> CandidateNameBuilder<'a> {
    pub fn new(settings: &'a ResolveSettings, hooks: &'a Hooks) -> Self {
        Self { settings, hooks }
    }

    /// Build the candidate list for `layout_name` within `layout_base`.
    ///
    /// An absent or empty base resolves to the configured default base.
    pub fn build(&self, layout_name: &str, layout_base: Option<&str>) -> CandidateNames {
        let base = self.settings.effective_base(layout_base);

        let requested = HookContext::new(layout_name, base);
        let name = self
            .hooks
            .layout_name
            .apply(layout_name.to_string(), &requested);

        let ctx = HookContext::new(&name, base);
        let include_subdir = self.hooks.include_subdir.apply(false, &ctx);

        let prefix = self.settings.prefix.as_str();
        let ext = self.settings.extension.as_str();

        let mut names = Vec::with_capacity(3);
        if include_subdir {
            names.push(format!("{prefix}{base}/{name}.{ext}"));
        }
        names.push(format!("{prefix}{base}-{name}.{ext}"));
        let root_fallback = format!("{prefix}{base}.{ext}");
        names.push(root_fallback.clone());

        let names = self.hooks.candidate_names.apply(names, &ctx);
        debug!(layout = %name, base, ?names, "Built candidate names");

        CandidateNames {
            layout_name: name,
            layout_base: base.to_string(),
            names,
            root_fallback: Some(root_fallback),
        }
    }
}
