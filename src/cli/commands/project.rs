//! Opening a project: config, validation, engine.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, FlexlocConfig, CONFIG_DIR};
use crate::engine::LayoutEngine;
use crate::error::{FlexlocError, Result};
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Exit code for missing or invalid configuration.
pub const CONFIG_EXIT_CODE: i32 = 2;

/// A loaded project ready for resolution.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: FlexlocConfig,
    pub engine: LayoutEngine,
}

impl Project {
    /// Load, validate and build the engine for `root`.
    ///
    /// `config_override` loads that single file instead of the merged layers.
    pub fn open(root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = load_config(root, config_override)?;
        validate(&config)?;
        let engine = LayoutEngine::from_config(&config, root);

        Ok(Self {
            root: root.to_path_buf(),
            config,
            engine,
        })
    }
}

/// Report a configuration failure through the UI.
///
/// Configuration problems become exit code 2; anything else propagates.
pub fn report_open_error(err: FlexlocError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match err {
        FlexlocError::ConfigNotFound { path } => {
            ui.error(&format!(
                "No configuration found at {}. Create {}/config.yml first.",
                path.display(),
                CONFIG_DIR
            ));
            Ok(CommandResult::failure(CONFIG_EXIT_CODE))
        }
        err @ (FlexlocError::ConfigParseError { .. } | FlexlocError::ConfigValidationError { .. }) => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(CONFIG_EXIT_CODE))
        }
        other => Err(other),
    }
}
