//! Named bindings exposed to a loaded template.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::LoadRequest;

/// Bindings the loader always sets itself.
pub const FIXED_BINDINGS: [&str; 5] = [
    "template_file",
    "require_once",
    "layout_name",
    "layout_base",
    "layout",
];

/// Host request bindings. Layout options never shadow these.
pub const HOST_BINDINGS: [&str; 11] = [
    "posts",
    "post",
    "did_header",
    "query",
    "rewrite",
    "db",
    "version",
    "request",
    "id",
    "comment",
    "user_id",
];

/// Host-supplied bindings shared by every load.
pub type AmbientBindings = IndexMap<String, Value>;

/// Check whether a name may not be bound from layout options.
pub fn is_reserved(name: &str) -> bool {
    FIXED_BINDINGS.contains(&name) || HOST_BINDINGS.contains(&name)
}

/// Whether `name` can be bound on its own (`[A-Za-z_][A-Za-z0-9_]*`).
fn is_bindable(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ordered bindings for one template load.
///
/// Order: the fixed bindings, then each bindable layout option, then the
/// ambient bindings not already bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateContext {
    bindings: IndexMap<String, Value>,
}

impl TemplateContext {
    /// Build the context for loading `path`.
    pub fn build(path: &Path, request: &LoadRequest<'_>, ambient: &AmbientBindings) -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert(
            "template_file".to_string(),
            Value::String(path.display().to_string()),
        );
        bindings.insert(
            "require_once".to_string(),
            Value::Bool(request.require_single_load),
        );
        bindings.insert(
            "layout_name".to_string(),
            Value::String(request.layout_name.to_string()),
        );
        bindings.insert(
            "layout_base".to_string(),
            Value::String(request.layout_base.to_string()),
        );
        bindings.insert("layout".to_string(), Value::Mapping(request.layout.clone()));

        for (key, value) in request.layout {
            let Some(name) = key.as_str() else { continue };
            if is_reserved(name) || !is_bindable(name) {
                continue;
            }
            bindings.insert(name.to_string(), value.clone());
        }

        for (name, value) in ambient {
            bindings
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        Self { bindings }
    }

    /// Value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Look up a dotted path such as `layout.items.0.title`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.bindings.get(parts.next()?)?;
        for part in parts {
            current = match current {
                Value::Mapping(map) => map.get(part)?,
                Value::Sequence(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Binding names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Convenience for building a layout-options mapping from pairs.
pub fn mapping_from<I, K, V>(pairs: I) -> Mapping
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Value>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
