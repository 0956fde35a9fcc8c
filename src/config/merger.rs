//! Deep merge algorithm for YAML configuration values.
//!
//! flexloc supports configuration layering where later configs override
//! earlier ones. This module implements the merge semantics.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - `search_paths` sequences are concatenated (registration is additive)
//! - Other arrays are replaced entirely
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Keys whose sequences accumulate across layers.
const ADDITIVE_KEYS: [&str; 1] = ["search_paths"];

/// Deep merge two YAML values.
///
/// Later values override earlier values at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                    continue;
                }

                let merged = match (base_map.get(key), overlay_value) {
                    (Some(Value::Sequence(base_seq)), Value::Sequence(overlay_seq))
                        if is_additive(key) =>
                    {
                        let mut combined = base_seq.clone();
                        combined.extend(overlay_seq.iter().cloned());
                        Value::Sequence(combined)
                    }
                    (Some(base_value), _) => deep_merge(base_value, overlay_value),
                    (None, _) => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

fn is_additive(key: &Value) -> bool {
    key.as_str().is_some_and(|k| ADDITIVE_KEYS.contains(&k))
}

/// Merge multiple configs in order (later overrides earlier).
///
/// Empty files (null documents) contribute nothing.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let base = yaml(
            r#"
roots:
  base: parent
  override: child
"#,
        );
        let overlay = yaml(
            r#"
roots:
  override: staging
"#,
        );

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["roots"]["override"], "staging");
        assert_eq!(result["roots"]["base"], "parent");
    }

    #[test]
    fn search_paths_concatenate() {
        let base = yaml("search_paths:\n  - path: shared\n");
        let overlay = yaml("search_paths:\n  - path: local\n");

        let result = deep_merge(&base, &overlay);
        let paths = result["search_paths"].as_sequence().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0]["path"], "shared");
        assert_eq!(paths[1]["path"], "local");
    }

    #[test]
    fn other_arrays_are_replaced() {
        let base = yaml("layouts:\n  widget:\n    tags: [a, b]\n");
        let overlay = yaml("layouts:\n  widget:\n    tags: [c]\n");

        let result = deep_merge(&base, &overlay);
        let tags = result["layouts"]["widget"]["tags"].as_sequence().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0], "c");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("ambient:\n  site_name: Example\n  locale: en\n");
        let overlay = yaml("ambient:\n  site_name: null\n");

        let result = deep_merge(&base, &overlay);
        assert!(result["ambient"].get("site_name").is_none());
        assert_eq!(result["ambient"]["locale"], "en");
    }

    #[test]
    fn merge_configs_merges_in_order_and_skips_empty_files() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml(""), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);
        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
