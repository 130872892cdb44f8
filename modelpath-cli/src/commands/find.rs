//! Command to find model files by partial name.

use crate::error::CliError;
use crate::utils::{extension_filter, Session};
use clap::Args;
use modelpath::output::Report;
use modelpath::path::discovery::find_model_files_by_name;

/// Find model files whose names contain NAME.
#[derive(Args)]
pub struct FindCommand {
    /// Partial file name; whitespace-separated words must all appear
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Extension to search for (repeatable); defaults to .osm and .idf
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,
}

impl FindCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        if self.name.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "NAME must not be empty".to_string(),
            ));
        }
        let filter = extension_filter(&self.ext)?;

        let files = find_model_files_by_name(&session.config, &self.name, filter.extensions());
        session.emit(&Report::Files(&files))
    }
}
