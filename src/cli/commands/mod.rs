//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that resolve templates
//! open the project through [`project::Project`].

pub mod candidates;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod locate;
pub mod paths;
pub mod project;
pub mod render;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use project::Project;
