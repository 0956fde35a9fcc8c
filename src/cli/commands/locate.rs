//! Locate command implementation.
//!
//! The `flexloc locate` command prints the template a layout resolves to.

use std::path::{Path, PathBuf};

use crate::cli::args::LocateArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::{report_open_error, Project};

/// The locate command implementation.
pub struct LocateCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: LocateArgs,
}

impl LocateCommand {
    /// Create a new locate command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: LocateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for LocateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = match Project::open(&self.project_root, self.config.as_deref()) {
            Ok(p) => p,
            Err(e) => return report_open_error(e, ui),
        };
        let engine = &project.engine;

        let candidates = engine.candidate_names(&self.args.name, self.args.base.as_deref());
        if ui.output_mode().shows_details() {
            for entry in engine.candidate_paths(&candidates) {
                ui.message(&format!("  {}", entry));
            }
        }

        match engine.locate_template(&self.args.name, self.args.base.as_deref()) {
            Some(path) => {
                ui.output(&format!("{}\n", path.display()));
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!(
                    "No template found for layout '{}' in base '{}'",
                    candidates.layout_name, candidates.layout_base
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
