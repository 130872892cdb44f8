//! Main entry point for the modelpath CLI.
//!
//! This is the command-line interface for resolving building-model file
//! references. It provides commands for:
//! - `resolve`: Resolve an existing file against the search roots
//! - `output`: Resolve a path to write to
//! - `suggest`: List files with similar names
//! - `find`, `copy`, `roots`, `show-config`, `completions`

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use error::CliError;
use utils::{GlobalOptions, Session};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; a second install is harmless
    let _ = modelpath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config,
        workspace_root: cli.workspace_root,
        format: cli.format,
    };

    let mut format = global.format.unwrap_or_default();
    let result = match cli.command {
        Command::Completions(cmd) => cmd.execute(),
        command => Session::load(&global).and_then(|session| {
            format = session.format;
            dispatch(command, &session)
        }),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            utils::report_error(&e, format);
            std::process::exit(e.exit_code());
        }
    }
}

fn dispatch(command: Command, session: &Session) -> Result<(), CliError> {
    match command {
        Command::Resolve(cmd) => cmd.execute(session),
        Command::Output(cmd) => cmd.execute(session),
        Command::Suggest(cmd) => cmd.execute(session),
        Command::Find(cmd) => cmd.execute(session),
        Command::Copy(cmd) => cmd.execute(session),
        Command::Roots(cmd) => cmd.execute(session),
        Command::ShowConfig(cmd) => cmd.execute(session),
        Command::Completions(cmd) => cmd.execute(),
    }
}
