//! Integration tests for config module public API.

use flexloc::config::{load_merged_config, validate, FlexlocConfig, LayoutBaseConfig};
use flexloc::LayoutEngine;
use std::fs;
use tempfile::TempDir;

fn write_config(temp: &TempDir, name: &str, content: &str) {
    let dir = temp.path().join(".flexloc");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn public_api_is_accessible() {
    let _config = FlexlocConfig::default();
    let _layout = LayoutBaseConfig::default();
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        "config.yml",
        r#"
roots:
  override: child
  base: parent
search_paths:
  - path: layouts
    key: widget
layouts:
  widget:
    aliases:
      old-hero: hero
"#,
    );
    fs::create_dir_all(temp.path().join("parent/layouts")).unwrap();
    fs::write(temp.path().join("parent/layouts/widget-hero.php"), "").unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config).unwrap();
    let engine = LayoutEngine::from_config(&config, temp.path());

    assert_eq!(
        engine.locate_template("old-hero", Some("widget")),
        Some(temp.path().join("parent/layouts/widget-hero.php"))
    );
}

#[test]
fn config_merge_workflow() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        "config.yml",
        "roots:\n  base: parent\nsearch_paths:\n  - path: shared\n",
    );
    write_config(
        &temp,
        "config.local.yml",
        "search_paths:\n  - path: local\n    priority: 1\nlayouts:\n  widget:\n    exclude_root_fallback: false\n",
    );

    let config = load_merged_config(temp.path()).unwrap();
    let engine = LayoutEngine::from_config(&config, temp.path());

    assert_eq!(engine.get_search_paths(None, false), vec!["local", "shared"]);

    let candidates = engine.candidate_names("hero", Some("widget"));
    let paths = engine.candidate_paths(&candidates);
    assert_eq!(paths.last().map(String::as_str), Some("widget.php"));
}

#[test]
fn ambient_bindings_reach_templates() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        "config.yml",
        "roots:\n  base: theme\nambient:\n  site_name: Example\n",
    );
    fs::create_dir_all(temp.path().join("theme")).unwrap();
    fs::write(
        temp.path().join("theme/block-note.php"),
        "${site_name} v${version}",
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    let engine = LayoutEngine::from_config(&config, temp.path());
    let records = vec![flexloc::render::LayoutRecord::new(
        flexloc::loader::mapping_from([("type", "note")]),
    )];

    let mut out = Vec::new();
    engine
        .render_layouts(&records, Some("block"), false, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Example v{}", env!("CARGO_PKG_VERSION"))
    );
}
