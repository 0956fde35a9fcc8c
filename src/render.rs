//! Layout records and bulk rendering support.
//!
//! A layout record is one row of a flexible-content field: a mapping whose
//! `type` names the layout. The whole mapping becomes the layout-options
//! mapping of the loaded template.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{FlexlocError, Result};
use crate::loader::value_to_text;

/// Field holding a record's layout name.
pub const TYPE_FIELD: &str = "type";

/// One layout instance from the content tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutRecord(pub Mapping);

impl LayoutRecord {
    pub fn new(fields: Mapping) -> Self {
        Self(fields)
    }

    /// The layout name, coerced to a string. Missing means empty.
    pub fn layout_type(&self) -> String {
        self.0
            .get(TYPE_FIELD)
            .map(value_to_text)
            .unwrap_or_default()
    }

    /// The layout-options mapping.
    pub fn fields(&self) -> &Mapping {
        &self.0
    }
}

impl From<Mapping> for LayoutRecord {
    fn from(fields: Mapping) -> Self {
        Self(fields)
    }
}

/// Captured output keyed by layout type.
pub type CapturedLayouts = IndexMap<String, String>;

/// Key for `layout_type` that is not yet used in `captured`.
///
/// Repeated types get `_` appended until unique: `hero`, `hero_`, `hero__`.
pub fn dedup_key(captured: &CapturedLayouts, layout_type: &str) -> String {
    let mut key = layout_type.to_string();
    while captured.contains_key(&key) {
        key.push('_');
    }
    key
}

/// Parse layout records from YAML or JSON text.
///
/// Accepts either a sequence of mappings or a mapping with a `layouts`
/// sequence.
pub fn parse_records(content: &str, source: &Path) -> Result<Vec<LayoutRecord>> {
    let parse_err = |message: String| FlexlocError::RecordsParseError {
        path: source.to_path_buf(),
        message,
    };

    let value: Value = serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
    let items = match value {
        Value::Sequence(items) => items,
        Value::Mapping(mut map) => match map.remove("layouts") {
            Some(Value::Sequence(items)) => items,
            _ => return Err(parse_err("expected a `layouts` sequence".to_string())),
        },
        Value::Null => Vec::new(),
        _ => return Err(parse_err("expected a sequence of layout records".to_string())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Mapping(fields) => Ok(LayoutRecord(fields)),
            _ => Err(parse_err(format!("record {} is not a mapping", index))),
        })
        .collect()
}

/// Load layout records from a file.
pub fn load_records(path: &Path) -> Result<Vec<LayoutRecord>> {
    let content = fs::read_to_string(path).map_err(|e| FlexlocError::RecordsParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_records(&content, path)
}
