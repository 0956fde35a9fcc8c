//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// flexloc - Layout template resolution.
#[derive(Debug, Parser)]
#[command(name = "flexloc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .flexloc/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the template a layout resolves to
    Locate(LocateArgs),

    /// Show candidate names and the ordered candidate paths
    Candidates(CandidatesArgs),

    /// Show registered search paths
    Paths(PathsArgs),

    /// Render a file of layout records
    Render(RenderArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `locate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocateArgs {
    /// Layout name
    pub name: String,

    /// Layout base (defaults to the configured default base)
    #[arg(short, long)]
    pub base: Option<String>,
}

/// Arguments for the `candidates` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CandidatesArgs {
    /// Layout name
    pub name: String,

    /// Layout base (defaults to the configured default base)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `paths` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PathsArgs {
    /// Lookup key (layout base); all keys when omitted
    pub key: Option<String>,

    /// Leave out the default search paths
    #[arg(long)]
    pub no_default: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// YAML or JSON file holding layout records
    pub records: PathBuf,

    /// Layout base (defaults to the configured default base)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Collect output per layout instead of streaming it
    #[arg(long)]
    pub capture: bool,

    /// Output captured layouts as JSON (implies --capture)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
