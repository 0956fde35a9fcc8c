//! The layout engine: registry, extension points, roots and loader in one
//! explicit context object.
//!
//! Registration (`register_path`, hooks, overrides) needs `&mut self`;
//! resolution and rendering only read. Callers sharing an engine across
//! threads wrap it in their own lock.
//!
//! # Example
//!
//! ```
//! use flexloc::{LayoutEngine, TemplateRoots};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let theme = TempDir::new().unwrap();
//! fs::create_dir_all(theme.path().join("layouts")).unwrap();
//! fs::write(theme.path().join("layouts/widget-hero.php"), "<h1>${title}</h1>").unwrap();
//!
//! let mut engine = LayoutEngine::new(TemplateRoots::single(theme.path())).with_prefix("");
//! engine.register_path("layouts", Some("widget"));
//!
//! let found = engine.locate_template("hero", Some("widget"));
//! assert_eq!(found, Some(theme.path().join("layouts/widget-hero.php")));
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use tracing::debug;

use crate::config::FlexlocConfig;
use crate::error::Result;
use crate::loader::{AmbientBindings, LayoutHandler, LoadRequest, TemplateLoader};
use crate::registry::{PathRegistry, DEFAULT_PRIORITY};
use crate::render::{dedup_key, CapturedLayouts, LayoutRecord};
use crate::resolve::{
    CandidateNameBuilder, CandidateNames, HookScope, Hooks, ResolveSettings, TemplateLocator,
    TemplateRoots,
};

/// Options for [`LayoutEngine::find_template`].
#[derive(Debug, Clone, Copy)]
pub struct FindOptions<'a> {
    /// Load the template after locating it.
    pub load: bool,
    /// Load each distinct path at most once.
    pub require_single_load: bool,
    /// Layout-options mapping handed to the loader.
    pub layout: Option<&'a Mapping>,
}

impl Default for FindOptions<'_> {
    fn default() -> Self {
        Self {
            load: false,
            require_single_load: true,
            layout: None,
        }
    }
}

/// Resolves and loads layout templates.
#[derive(Debug)]
pub struct LayoutEngine {
    roots: TemplateRoots,
    settings: ResolveSettings,
    registry: PathRegistry,
    hooks: Hooks,
    loader: TemplateLoader,
}

impl LayoutEngine {
    /// Create an engine over the given roots with default settings.
    pub fn new(roots: TemplateRoots) -> Self {
        let registry = PathRegistry::new(&roots.override_root, &roots.base_root);
        Self {
            roots,
            settings: ResolveSettings::default(),
            registry,
            hooks: Hooks::new(),
            loader: TemplateLoader::new(),
        }
    }

    /// Build an engine from configuration.
    ///
    /// Relative roots are resolved against `project_root`. Search paths,
    /// per-base extension-point values and ambient bindings are registered
    /// from the config.
    pub fn from_config(config: &FlexlocConfig, project_root: &Path) -> Self {
        let base_root = project_root.join(&config.roots.base);
        let override_root = config
            .roots
            .override_root
            .as_ref()
            .map(|root| project_root.join(root))
            .unwrap_or_else(|| base_root.clone());

        let settings = ResolveSettings {
            default_base: config.settings.default_base.clone(),
            extension: config.settings.extension.clone(),
            ..ResolveSettings::default()
        };

        let mut engine = Self::new(TemplateRoots::new(override_root, base_root)).with_settings(settings);

        for entry in &config.search_paths {
            engine.register_path_with_priority(&entry.path, entry.key.as_deref(), entry.priority);
        }

        for (base, layout) in &config.layouts {
            if let Some(subdirectory) = layout.subdirectory {
                engine
                    .hooks
                    .include_subdir
                    .set(HookScope::base(base.as_str()), subdirectory);
            }
            if let Some(exclude) = layout.exclude_root_fallback {
                engine
                    .hooks
                    .exclude_root_fallback
                    .set(HookScope::base(base.as_str()), exclude);
            }
            if !layout.aliases.is_empty() {
                let aliases = layout.aliases.clone();
                engine
                    .hooks
                    .layout_name
                    .add(HookScope::base(base.as_str()), move |name, _| {
                        aliases.get(&name).cloned().unwrap_or(name)
                    });
            }
        }

        let mut ambient: AmbientBindings = config
            .ambient
            .iter()
            .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), v.clone())))
            .collect();
        ambient
            .entry("version".to_string())
            .or_insert_with(|| env!("CARGO_PKG_VERSION").into());
        engine.loader = TemplateLoader::new().with_ambient(ambient);

        engine
    }

    /// Replace the naming settings.
    pub fn with_settings(mut self, settings: ResolveSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the filename prefix (normally read once from the environment).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.settings.prefix = prefix.into();
        self
    }

    /// Set the host bindings exposed to every loaded template.
    pub fn with_ambient(mut self, ambient: AmbientBindings) -> Self {
        self.loader = self.loader.with_ambient(ambient);
        self
    }

    pub fn roots(&self) -> &TemplateRoots {
        &self.roots
    }

    pub fn settings(&self) -> &ResolveSettings {
        &self.settings
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Extension points, for registering callbacks.
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Register a search path at the default priority.
    pub fn register_path(&mut self, path: &str, key: Option<&str>) {
        self.register_path_with_priority(path, key, DEFAULT_PRIORITY);
    }

    /// Register a search path at `priority` (lower is searched first).
    pub fn register_path_with_priority(&mut self, path: &str, key: Option<&str>, priority: i32) {
        self.registry.register(path, key, priority);
    }

    /// Drop every registered search path.
    pub fn clear_paths(&mut self) {
        self.registry.clear();
    }

    /// Search paths for `key`, optionally followed by the default paths.
    pub fn get_search_paths(&self, key: Option<&str>, include_default: bool) -> Vec<String> {
        self.registry.paths_for_key_with_default(key, include_default)
    }

    /// Register a loader override for a base or a single layout.
    pub fn register_override<H>(&mut self, base: &str, name: Option<&str>, handler: H)
    where
        H: LayoutHandler + 'static,
    {
        self.loader.register_override(base, name, handler);
    }

    /// Candidate filenames for a layout.
    pub fn candidate_names(&self, layout_name: &str, layout_base: Option<&str>) -> CandidateNames {
        CandidateNameBuilder::new(&self.settings, &self.hooks).build(layout_name, layout_base)
    }

    fn locator(&self) -> TemplateLocator<'_> {
        TemplateLocator::new(&self.settings, &self.hooks, &self.roots)
    }

    /// The final ordered entry list checked against the roots.
    pub fn candidate_paths(&self, candidates: &CandidateNames) -> Vec<String> {
        let search_paths = self.get_search_paths(Some(&candidates.layout_base), true);
        self.locator().candidate_paths(candidates, &search_paths)
    }

    /// Locate the template for a layout without loading it.
    pub fn locate_template(&self, layout_name: &str, layout_base: Option<&str>) -> Option<PathBuf> {
        let candidates = self.candidate_names(layout_name, layout_base);
        let entries = self.candidate_paths(&candidates);
        self.locator().find_existing(&entries)
    }

    /// Locate the first existing candidate and optionally load it into `out`.
    pub fn find_template(
        &self,
        candidates: &CandidateNames,
        options: FindOptions<'_>,
        out: &mut dyn Write,
    ) -> Result<Option<PathBuf>> {
        let entries = self.candidate_paths(candidates);
        let located = self.locator().find_existing(&entries);

        if options.load {
            let empty = Mapping::new();
            let request = LoadRequest {
                layout_name: &candidates.layout_name,
                layout_base: &candidates.layout_base,
                layout: options.layout.unwrap_or(&empty),
                require_single_load: options.require_single_load,
            };
            self.loader.load(located.as_deref(), &request, out)?;
        }

        Ok(located)
    }

    /// Load an already located template.
    pub fn load_template(&self, path: Option<&Path>, request: &LoadRequest<'_>, out: &mut dyn Write) -> Result<()> {
        self.loader.load(path, request, out)
    }

    /// Render every layout record in order.
    ///
    /// With `capture`, each record's output is collected under its layout
    /// type (deduplicated with trailing `_`) and nothing is written to `out`.
    /// Without it, output goes straight to `out` and the map is empty.
    /// Records without a template produce no output.
    pub fn render_layouts(
        &self,
        records: &[LayoutRecord],
        layout_base: Option<&str>,
        capture: bool,
        out: &mut dyn Write,
    ) -> Result<CapturedLayouts> {
        let mut captured = CapturedLayouts::new();

        for record in records {
            let layout_type = record.layout_type();
            let candidates = self.candidate_names(&layout_type, layout_base);
            let options = FindOptions {
                load: true,
                require_single_load: false,
                layout: Some(record.fields()),
            };

            if capture {
                let mut buffer = Vec::new();
                self.find_template(&candidates, options, &mut buffer)?;
                let key = dedup_key(&captured, &layout_type);
                captured.insert(key, String::from_utf8_lossy(&buffer).into_owned());
            } else {
                let found = self.find_template(&candidates, options, out)?;
                if found.is_none() {
                    debug!(layout = %layout_type, "No template for layout record");
                }
            }
        }

        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{handler_fn, mapping_from};
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str, body: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn two_roots() -> (TempDir, TempDir) {
        (TempDir::new().unwrap(), TempDir::new().unwrap())
    }

    fn engine(override_dir: &TempDir, base_dir: &TempDir) -> LayoutEngine {
        LayoutEngine::new(TemplateRoots::new(override_dir.path(), base_dir.path())).with_prefix("")
    }

    #[test]
    fn registered_root_paths_are_stripped() {
        let (child, parent) = two_roots();
        let mut engine = engine(&child, &parent);
        let layouts = child.path().join("layouts");
        engine.register_path(&layouts.to_string_lossy(), Some("widget"));
        engine.register_path(&parent.path().to_string_lossy(), Some("widget"));

        assert_eq!(engine.get_search_paths(Some("widget"), false), vec!["/layouts"]);
    }

    #[test]
    fn locates_through_search_path_in_base_root() {
        let (child, parent) = two_roots();
        touch(parent.path(), "templates/widget-hero.php", "");
        let mut engine = engine(&child, &parent);
        engine.register_path_with_priority("/templates", Some("widget"), 10);

        assert_eq!(
            engine.locate_template("hero", Some("widget")),
            Some(parent.path().join("templates/widget-hero.php"))
        );
    }

    #[test]
    fn default_paths_searched_after_key_paths() {
        let (child, parent) = two_roots();
        touch(parent.path(), "shared/widget-hero.php", "");
        touch(parent.path(), "widgets/widget-hero.php", "");
        let mut engine = engine(&child, &parent);
        engine.register_path_with_priority("shared", None, 1);
        engine.register_path_with_priority("widgets", Some("widget"), 99);

        assert_eq!(
            engine.locate_template("hero", Some("widget")),
            Some(parent.path().join("widgets/widget-hero.php"))
        );
    }

    #[test]
    fn cleared_paths_fall_back_to_bare_names() {
        let (child, parent) = two_roots();
        touch(parent.path(), "widget.php", "");
        let mut engine = engine(&child, &parent);
        engine.register_path("layouts", Some("widget"));
        assert_eq!(engine.locate_template("hero", Some("widget")), None);

        engine.clear_paths();
        assert!(engine.registry().is_empty());
        assert_eq!(
            engine.locate_template("hero", Some("widget")),
            Some(parent.path().join("widget.php"))
        );
    }

    #[test]
    fn find_template_loads_when_asked() {
        let (child, parent) = two_roots();
        touch(child.path(), "widget-hero.php", "Hello ${name}");
        let engine = engine(&child, &parent);
        let candidates = engine.candidate_names("hero", Some("widget"));
        let layout = mapping_from([("name", "World")]);

        let mut out = Vec::new();
        let found = engine
            .find_template(
                &candidates,
                FindOptions {
                    load: true,
                    require_single_load: true,
                    layout: Some(&layout),
                },
                &mut out,
            )
            .unwrap();

        assert!(found.is_some());
        assert_eq!(String::from_utf8(out).unwrap(), "Hello World");
    }

    #[test]
    fn find_template_without_load_writes_nothing() {
        let (child, parent) = two_roots();
        touch(child.path(), "widget-hero.php", "Hello");
        let engine = engine(&child, &parent);
        let candidates = engine.candidate_names("hero", Some("widget"));

        let mut out = Vec::new();
        let found = engine
            .find_template(&candidates, FindOptions::default(), &mut out)
            .unwrap();
        assert!(found.is_some());
        assert!(out.is_empty());
    }

    #[test]
    fn render_without_capture_streams_output() {
        let (child, parent) = two_roots();
        touch(child.path(), "widget-hero.php", "[${title}]");
        let engine = engine(&child, &parent);
        let records = vec![
            LayoutRecord::new(mapping_from([("type", "hero"), ("title", "A")])),
            LayoutRecord::new(mapping_from([("type", "missing")])),
            LayoutRecord::new(mapping_from([("type", "hero"), ("title", "B")])),
        ];

        let mut out = Vec::new();
        let captured = engine
            .render_layouts(&records, Some("widget"), false, &mut out)
            .unwrap();

        assert!(captured.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "[A][B]");
    }

    #[test]
    fn render_with_capture_dedups_keys() {
        let (child, parent) = two_roots();
        touch(child.path(), "widget-hero.php", "[${title}]");
        let engine = engine(&child, &parent);
        let records = vec![
            LayoutRecord::new(mapping_from([("type", "hero"), ("title", "A")])),
            LayoutRecord::new(mapping_from([("type", "hero"), ("title", "B")])),
        ];

        let mut out = Vec::new();
        let captured = engine
            .render_layouts(&records, Some("widget"), true, &mut out)
            .unwrap();

        assert!(out.is_empty());
        let keys: Vec<&str> = captured.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["hero", "hero_"]);
        assert_eq!(captured["hero_"], "[B]");
    }

    #[test]
    fn overrides_are_dispatched_from_engine() {
        let (child, parent) = two_roots();
        touch(child.path(), "widget-hero.php", "default");
        let mut engine = engine(&child, &parent);
        engine.register_override(
            "widget",
            Some("hero"),
            handler_fn(|path, _, out| {
                write!(out, "override:{}", path.file_name().unwrap_or_default().to_string_lossy())?;
                Ok(())
            }),
        );
        let records = vec![LayoutRecord::new(mapping_from([("type", "hero")]))];

        let mut out = Vec::new();
        let captured = engine
            .render_layouts(&records, Some("widget"), true, &mut out)
            .unwrap();
        assert_eq!(captured["hero"], "override:widget-hero.php");
    }
}
