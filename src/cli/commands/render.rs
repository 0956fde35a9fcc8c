//! Render command implementation.
//!
//! The `flexloc render` command renders a file of layout records in order,
//! either streaming each template's output or collecting it per layout.

use std::path::{Path, PathBuf};

use crate::cli::args::RenderArgs;
use crate::error::{FlexlocError, Result};
use crate::render::load_records;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::{report_open_error, Project};

/// The render command implementation.
pub struct RenderCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: RenderArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = match Project::open(&self.project_root, self.config.as_deref()) {
            Ok(p) => p,
            Err(e) => return report_open_error(e, ui),
        };

        let records = match load_records(&self.args.records) {
            Ok(records) => records,
            Err(e @ FlexlocError::RecordsParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let capture = self.args.capture || self.args.json;
        let mut streamed = Vec::new();
        let captured = project.engine.render_layouts(
            &records,
            self.args.base.as_deref(),
            capture,
            &mut streamed,
        )?;

        if !capture {
            ui.output(&String::from_utf8_lossy(&streamed));
            return Ok(CommandResult::success());
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&captured).map_err(|e| FlexlocError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
        } else {
            for (key, output) in &captured {
                ui.show_header(key);
                ui.output(output);
                if !output.is_empty() && !output.ends_with('\n') {
                    ui.output("\n");
                }
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

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".flexloc")).unwrap();
        fs::write(
            temp.path().join(".flexloc/config.yml"),
            "roots:\n  base: theme\nambient:\n  site_name: Example\n",
        )
        .unwrap();
        fs::create_dir_all(temp.path().join("theme")).unwrap();
        fs::write(
            temp.path().join("theme/widget-hero.php"),
            "<h1>${title} | ${site_name}</h1>",
        )
        .unwrap();
        fs::write(
            temp.path().join("page.yml"),
            "- type: hero\n  title: One\n- type: gallery\n- type: hero\n  title: Two\n",
        )
        .unwrap();
        temp
    }

    fn args(temp: &TempDir, capture: bool, json: bool) -> RenderArgs {
        RenderArgs {
            records: temp.path().join("page.yml"),
            base: Some("widget".to_string()),
            capture,
            json,
        }
    }

    #[test]
    fn streams_rendered_layouts_in_order() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = RenderCommand::new(temp.path(), None, args(&temp, false, false))
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        assert_eq!(
            ui.output_text(),
            "<h1>One | Example</h1><h1>Two | Example</h1>"
        );
    }

    #[test]
    fn captures_as_json_with_deduplicated_keys() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        RenderCommand::new(temp.path(), None, args(&temp, false, true))
            .execute(&mut ui)
            .unwrap();
        let captured: serde_json::Value = serde_json::from_str(ui.output_text()).unwrap();
        assert_eq!(captured["hero"], "<h1>One | Example</h1>");
        assert_eq!(captured["gallery"], "");
        assert_eq!(captured["hero_"], "<h1>Two | Example</h1>");
    }

    #[test]
    fn captured_output_is_listed_under_headers() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        RenderCommand::new(temp.path(), None, args(&temp, true, false))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.headers(), ["hero", "gallery", "hero_"]);
    }

    #[test]
    fn bad_records_file_fails() {
        let temp = setup_project();
        fs::write(temp.path().join("page.yml"), "- just-a-string\n").unwrap();
        let mut ui = MockUI::new();

        let result = RenderCommand::new(temp.path(), None, args(&temp, false, false))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("record 0"));
    }
}
