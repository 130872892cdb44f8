//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "modelpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// Runs without loading configuration, so it works in a broken setup.
    pub fn execute(&self) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("# Enable with: eval \"$(modelpath completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("# Save to a directory in $fpath as _modelpath");
            }
            Shell::Fish => {
                eprintln!("# Enable with: modelpath completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!(
                    "# Enable with: modelpath completions powershell | Out-String | Invoke-Expression"
                );
            }
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
