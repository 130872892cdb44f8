//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CopyCommand, FindCommand, OutputCommand, ResolveCommand, RootsCommand,
    ShowConfigCommand, SuggestCommand,
};
use clap::{Parser, Subcommand};
use modelpath::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for resolving building-model file references.
#[derive(Parser)]
#[command(name = "modelpath")]
#[command(version, about = "Resolve model file references against search roots", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Additional configuration file, layered above discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "MODELPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the workspace root
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "MODELPATH_WORKSPACE_ROOT"
    )]
    pub workspace_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve an existing file
    Resolve(ResolveCommand),

    /// Resolve a path to write to, creating its directory
    Output(OutputCommand),

    /// Suggest files with names similar to PATH
    Suggest(SuggestCommand),

    /// Find model files by partial name
    Find(FindCommand),

    /// Copy a file between resolved locations
    Copy(CopyCommand),

    /// Show the search roots in priority order
    Roots(RootsCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
