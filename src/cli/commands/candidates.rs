//! Candidates command implementation.
//!
//! The `flexloc candidates` command shows how a layout is resolved: the
//! candidate filenames, the ordered candidate paths, and the winner.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CandidatesArgs;
use crate::error::{FlexlocError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::{report_open_error, Project};

/// The candidates command implementation.
pub struct CandidatesCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: CandidatesArgs,
}

#[derive(Debug, Serialize)]
struct CandidateReport {
    layout_name: String,
    layout_base: String,
    names: Vec<String>,
    paths: Vec<String>,
    found: Option<PathBuf>,
}

impl CandidatesCommand {
    /// Create a new candidates command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: CandidatesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CandidatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = match Project::open(&self.project_root, self.config.as_deref()) {
            Ok(p) => p,
            Err(e) => return report_open_error(e, ui),
        };
        let engine = &project.engine;

        let candidates = engine.candidate_names(&self.args.name, self.args.base.as_deref());
        let paths = engine.candidate_paths(&candidates);
        let found = engine.locate_template(&self.args.name, self.args.base.as_deref());

        let report = CandidateReport {
            layout_name: candidates.layout_name,
            layout_base: candidates.layout_base,
            names: candidates.names,
            paths,
            found,
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| FlexlocError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        ui.key_value("layout", &report.layout_name);
        ui.key_value("base", &report.layout_base);

        ui.show_header("Candidate names");
        for name in &report.names {
            ui.output(&format!("{}\n", name));
        }

        ui.show_header("Candidate paths");
        for path in &report.paths {
            ui.output(&format!("{}\n", path));
        }

        match &report.found {
            Some(path) => ui.success(&format!("Resolves to {}", path.display())),
            None => ui.warning("No candidate exists"),
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

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".flexloc")).unwrap();
        fs::write(temp.path().join(".flexloc/config.yml"), config).unwrap();
        temp
    }

    fn args(json: bool) -> CandidatesArgs {
        CandidatesArgs {
            name: "hero".to_string(),
            base: Some("widget".to_string()),
            json,
        }
    }

    #[test]
    fn lists_names_then_paths() {
        let temp = setup_project("roots:\n  base: theme\nsearch_paths:\n  - path: layouts\n");
        let cmd = CandidatesCommand::new(temp.path(), None, args(false));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        assert_eq!(
            ui.output_text(),
            "widget-hero.php\nwidget.php\nlayouts/widget-hero.php\nlayouts/widget.php\nwidget-hero.php\n"
        );
        assert!(ui.has_warning("No candidate exists"));
    }

    #[test]
    fn json_report_includes_found_path() {
        let temp = setup_project("roots:\n  base: theme\n");
        fs::create_dir_all(temp.path().join("theme")).unwrap();
        fs::write(temp.path().join("theme/widget.php"), "").unwrap();
        let cmd = CandidatesCommand::new(temp.path(), None, args(true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        let report: serde_json::Value = serde_json::from_str(ui.output_text()).unwrap();
        assert_eq!(report["layout_base"], "widget");
        assert_eq!(report["names"][1], "widget.php");
        assert!(report["found"].as_str().unwrap().ends_with("widget.php"));
    }

    #[test]
    fn subdirectory_setting_adds_nested_candidate() {
        let temp = setup_project("roots:\n  base: theme\nlayouts:\n  widget:\n    subdirectory: true\n");
        let cmd = CandidatesCommand::new(temp.path(), None, args(true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        let report: serde_json::Value = serde_json::from_str(ui.output_text()).unwrap();
        assert_eq!(report["names"][0], "widget/hero.php");
    }
}
