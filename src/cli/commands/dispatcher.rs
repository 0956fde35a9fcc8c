//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit status for the process; codes outside `0..=255` become 1.
    pub fn process_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load this config file instead of discovering and merging.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config_override = config;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.project_root.as_path();
        let config = self.config_override.as_deref();

        match &cli.command {
            Commands::Locate(args) => {
                super::locate::LocateCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Candidates(args) => {
                super::candidates::CandidatesCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Paths(args) => {
                super::paths::PathsCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Render(args) => {
                super::render::RenderCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Config(args) => {
                super::config::ConfigCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
