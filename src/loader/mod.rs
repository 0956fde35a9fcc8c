//! Loading a located template.
//!
//! A located path is handed to the most specific registered handler:
//!
//! 1. an override for the exact `(base, name)` layout
//! 2. an override for the whole base
//! 3. the default loader
//!
//! The default loader reads the file, builds a [`TemplateContext`] and writes
//! the `${var}`-interpolated text to the output.

pub mod context;
pub mod interpolation;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_yaml::Mapping;
use tracing::debug;

use crate::error::{FlexlocError, Result};

pub use context::{is_reserved, mapping_from, AmbientBindings, TemplateContext, FIXED_BINDINGS, HOST_BINDINGS};
pub use interpolation::{render_template, value_to_text};

/// Everything a handler needs to load one layout.
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest<'a> {
    pub layout_name: &'a str,
    pub layout_base: &'a str,
    /// The layout-options mapping.
    pub layout: &'a Mapping,
    /// Load each distinct path at most once.
    pub require_single_load: bool,
}

/// A loader for one layout or layout base.
pub trait LayoutHandler: Send + Sync {
    /// Load the template at `path`, writing its output to `out`.
    fn load(&self, path: &Path, request: &LoadRequest<'_>, out: &mut dyn Write) -> Result<()>;
}

impl<F> LayoutHandler for F
where
    F: Fn(&Path, &LoadRequest<'_>, &mut dyn Write) -> Result<()> + Send + Sync,
{
    fn load(&self, path: &Path, request: &LoadRequest<'_>, out: &mut dyn Write) -> Result<()> {
        self(path, request, out)
    }
}

/// Pin a closure to the [`LayoutHandler`] call signature.
///
/// Closures passed straight to [`TemplateLoader::register_override`] cannot
/// infer higher-ranked argument lifetimes; wrapping them here fixes that.
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(&Path, &LoadRequest<'_>, &mut dyn Write) -> Result<()> + Send + Sync,
{
    f
}

type OverrideKey = (String, Option<String>);

/// Dispatches located templates to override handlers or the default loader.
#[derive(Default)]
pub struct TemplateLoader {
    overrides: HashMap<OverrideKey, Box<dyn LayoutHandler>>,
    ambient: AmbientBindings,
    loaded: Mutex<HashSet<PathBuf>>,
}

impl fmt::Debug for TemplateLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateLoader")
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .field("ambient", &self.ambient)
            .field("loaded", &self.loaded.lock().len())
            .finish()
    }
}

impl TemplateLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host bindings exposed to every template.
    pub fn with_ambient(mut self, ambient: AmbientBindings) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn ambient(&self) -> &AmbientBindings {
        &self.ambient
    }

    /// Register an override for a whole base (`name = None`) or one layout.
    ///
    /// A later registration for the same key replaces the earlier one.
    pub fn register_override<H>(&mut self, base: &str, name: Option<&str>, handler: H)
    where
        H: LayoutHandler + 'static,
    {
        debug!(base, ?name, "Registering loader override");
        self.overrides.insert(
            (base.to_string(), name.map(str::to_string)),
            Box::new(handler),
        );
    }

    fn override_for(&self, base: &str, name: &str) -> Option<&dyn LayoutHandler> {
        self.overrides
            .get(&(base.to_string(), Some(name.to_string())))
            .or_else(|| self.overrides.get(&(base.to_string(), None)))
            .map(|handler| handler.as_ref())
    }

    /// Load a located template. `None` does nothing.
    pub fn load(&self, path: Option<&Path>, request: &LoadRequest<'_>, out: &mut dyn Write) -> Result<()> {
        let Some(path) = path else {
            return Ok(());
        };

        match self.override_for(request.layout_base, request.layout_name) {
            Some(handler) => {
                debug!(path = %path.display(), "Loading template through override");
                handler.load(path, request, out)
            }
            None => self.load_default(path, request, out),
        }
    }

    /// The default loader: read, bind, interpolate, write.
    pub fn load_default(&self, path: &Path, request: &LoadRequest<'_>, out: &mut dyn Write) -> Result<()> {
        // Claimed under one lock so concurrent loads cannot both pass.
        if request.require_single_load && !self.loaded.lock().insert(path.to_path_buf()) {
            debug!(path = %path.display(), "Template already loaded, skipping");
            return Ok(());
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(source) => {
                if request.require_single_load {
                    self.loaded.lock().remove(path);
                }
                return Err(FlexlocError::TemplateLoad {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let context = TemplateContext::build(path, request, &self.ambient);
        let rendered = render_template(&source, &context);
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Whether the default loader has already loaded `path` once.
    pub fn was_loaded(&self, path: &Path) -> bool {
        self.loaded.lock().contains(path)
    }
}
