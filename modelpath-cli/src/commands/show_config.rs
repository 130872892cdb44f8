//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use modelpath::config::OutputFormat;

/// Show the configuration after files, environment, and flags are merged.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let text = match session.format {
            OutputFormat::Human => serde_yaml::to_string(&session.config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?,
            OutputFormat::Json => serde_json::to_string_pretty(&session.config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?,
        };
        print!("{}", text.trim_end());
        println!();
        Ok(())
    }
}
