//! Command to copy a file between resolved locations.

use crate::error::CliError;
use crate::utils::{extension_filter, Session};
use clap::Args;
use modelpath::output::Report;
use modelpath::{copy_file, CopyOptions};

/// Copy SOURCE to TARGET.
///
/// SOURCE is resolved like `resolve`; TARGET like `output`.
#[derive(Args)]
pub struct CopyCommand {
    /// File to copy
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination reference
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Replace an existing target
    #[arg(long)]
    pub overwrite: bool,

    /// Allowed extension for both ends (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,
}

impl CopyCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let filter = extension_filter(&self.ext)?;
        let options = CopyOptions::new(self.source, self.target)
            .with_overwrite(self.overwrite)
            .with_extensions(filter.extensions());

        let report = copy_file(&session.config, &options)?;
        if session.quiet {
            return Ok(());
        }
        session.emit(&Report::Copy(&report))
    }
}
