//! Command-line interface for flexloc.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CandidatesArgs, Cli, Commands, CompletionsArgs, ConfigArgs, LocateArgs, PathsArgs, RenderArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, Project};
