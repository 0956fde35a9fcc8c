//! Config command implementation.
//!
//! The `flexloc config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, validate_config, ConfigPaths};
use crate::error::{FlexlocError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::report_open_error;

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config.as_deref()) {
            Ok(c) => c,
            Err(e) => return report_open_error(e, ui),
        };

        match &self.config {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => {
                for path in ConfigPaths::discover(&self.project_root).all_existing() {
                    ui.message(&format!("# {}", path.display()));
                }
            }
        }

        for error in validate_config(&config) {
            ui.warning(&format!("{} ({})", error.message, error.rule));
        }

        let rendered = if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| FlexlocError::Other(e.into()))?;
            format!("{}\n", json)
        } else {
            serde_yaml::to_string(&config).map_err(|e| FlexlocError::Other(e.into()))?
        };
        ui.output(&rendered);

        Ok(CommandResult::success())
    }
}
