//! Candidate path assembly and two-root existence checks.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::candidates::CandidateNames;
use super::hooks::{HookContext, Hooks};
use super::ResolveSettings;

/// The two physical directories templates are looked up in.
///
/// The override root is always checked before the base root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoots {
    pub override_root: PathBuf,
    pub base_root: PathBuf,
}

impl TemplateRoots {
    pub fn new(override_root: impl Into<PathBuf>, base_root: impl Into<PathBuf>) -> Self {
        Self {
            override_root: override_root.into(),
            base_root: base_root.into(),
        }
    }

    /// Use one directory as both roots.
    pub fn single(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            override_root: root.clone(),
            base_root: root,
        }
    }

    /// Roots in lookup order.
    pub fn in_order(&self) -> [&Path; 2] {
        [&self.override_root, &self.base_root]
    }
}

/// Join a search path and a candidate name with a single separator.
pub fn join_entry(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches(['/', '\\']);
    let name = name.trim_start_matches(['/', '\\']);
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Finds the first existing template for a candidate list.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLocator<'a> {
    settings: &'a ResolveSettings,
    hooks: &'a Hooks,
    roots: &'a TemplateRoots,
}

impl<'a> TemplateLocator<'a> {
    pub fn new(settings: &'a ResolveSettings, hooks: &'a Hooks, roots: &'a TemplateRoots) -> Self {
        Self {
            settings,
            hooks,
            roots,
        }
    }

    /// Whether the bare `{base}` name is kept out of the root fallback.
    ///
    /// Only asked of the hooks when no prefix is set and the base is not
    /// the default base. A prefixed or default-base name cannot collide
    /// with an unrelated root-level template, so it is always kept.
    fn exclude_root_fallback(&self, ctx: &HookContext<'_>) -> bool {
        if self.settings.prefix.is_empty() && ctx.layout_base != self.settings.default_base {
            self.hooks.exclude_root_fallback.apply(true, ctx)
        } else {
            false
        }
    }

    /// Assemble the ordered list of candidate entries, relative to the roots.
    ///
    /// Search paths are the outer loop and candidate names the inner one.
    /// When search paths exist, the bare names follow as a root fallback.
    pub fn candidate_paths(&self, candidates: &CandidateNames, search_paths: &[String]) -> Vec<String> {
        let ctx = HookContext::new(&candidates.layout_name, &candidates.layout_base);

        let mut entries = Vec::with_capacity((search_paths.len() + 1) * candidates.names.len());
        if search_paths.is_empty() {
            entries.extend(candidates.names.iter().cloned());
        } else {
            for dir in search_paths {
                for name in &candidates.names {
                    entries.push(join_entry(dir, name));
                }
            }

            let exclude = self.exclude_root_fallback(&ctx);
            for name in &candidates.names {
                if exclude && candidates.root_fallback.as_ref() == Some(name) {
                    trace!(%name, "Excluding base name from root fallback");
                    continue;
                }
                entries.push(name.clone());
            }
        }

        self.hooks.template_paths.apply(entries, &ctx)
    }

    /// First entry that exists as a file, override root before base root.
    pub fn find_existing(&self, entries: &[String]) -> Option<PathBuf> {
        for entry in entries {
            let relative = entry.trim_start_matches(['/', '\\']);
            if relative.is_empty() {
                continue;
            }
            for root in self.roots.in_order() {
                let candidate = root.join(relative);
                if candidate.is_file() {
                    debug!(path = %candidate.display(), "Located template");
                    return Some(candidate);
                }
                trace!(path = %candidate.display(), "Template candidate missing");
            }
        }
        None
    }

    /// Resolve `candidates` against `search_paths` and the two roots.
    pub fn locate(&self, candidates: &CandidateNames, search_paths: &[String]) -> Option<PathBuf> {
        let entries = self.candidate_paths(candidates, search_paths);
        self.find_existing(&entries)
    }
}
