//! Paths command implementation.
//!
//! The `flexloc paths` command shows registered search paths, in the order
//! they are searched.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::cli::args::PathsArgs;
use crate::error::{FlexlocError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::{report_open_error, Project};

/// The paths command implementation.
pub struct PathsCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: PathsArgs,
}

impl PathsCommand {
    /// Create a new paths command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: PathsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for PathsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = match Project::open(&self.project_root, self.config.as_deref()) {
            Ok(p) => p,
            Err(e) => return report_open_error(e, ui),
        };
        let engine = &project.engine;
        let include_default = !self.args.no_default;

        let listing: IndexMap<String, Vec<String>> = match &self.args.key {
            Some(key) => IndexMap::from([(
                key.clone(),
                engine.get_search_paths(Some(key), include_default),
            )]),
            None => engine
                .registry()
                .keys()
                .into_iter()
                .map(|key| (key.to_string(), engine.get_search_paths(Some(key), false)))
                .collect(),
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&listing).map_err(|e| FlexlocError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        if listing.values().all(Vec::is_empty) {
            ui.warning("No search paths registered");
            return Ok(CommandResult::success());
        }

        for (key, paths) in &listing {
            ui.show_header(key);
            for path in paths {
                ui.output(&format!("{}\n", path));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
roots:
  base: theme
search_paths:
  - path: shared
  - path: widgets
    key: widget
    priority: 20
  - path: widgets-first
    key: widget
    priority: 5
"#;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".flexloc")).unwrap();
        fs::write(temp.path().join(".flexloc/config.yml"), CONFIG).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: PathsArgs) -> MockUI {
        let mut ui = MockUI::new();
        PathsCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();
        ui
    }

    #[test]
    fn key_paths_by_priority_then_default() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PathsArgs {
                key: Some("widget".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ui.output_text(), "widgets-first\nwidgets\nshared\n");
    }

    #[test]
    fn no_default_leaves_out_shared_paths() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PathsArgs {
                key: Some("widget".to_string()),
                no_default: true,
                json: false,
            },
        );
        assert_eq!(ui.output_text(), "widgets-first\nwidgets\n");
    }

    #[test]
    fn all_keys_as_json() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PathsArgs {
                json: true,
                ..Default::default()
            },
        );
        let listing: serde_json::Value = serde_json::from_str(ui.output_text()).unwrap();
        assert_eq!(listing["_default"][0], "shared");
        assert_eq!(listing["widget"][1], "widgets");
    }

    #[test]
    fn unknown_key_warns() {
        let temp = setup_project();
        let ui = run(
            &temp,
            PathsArgs {
                key: Some("card".to_string()),
                no_default: true,
                json: false,
            },
        );
        assert!(ui.has_warning("No search paths"));
    }
}
