//! Command to resolve a path for writing.

use crate::error::CliError;
use crate::utils::{extension_filter, Session};
use clap::Args;
use modelpath::output::Report;
use modelpath::PathResolver;
use std::path::PathBuf;

/// Resolve where an output file should be written.
///
/// The parent directory is created when missing.
#[derive(Args)]
pub struct OutputCommand {
    /// Output file reference
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory for bare names; defaults to the output root
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Allowed extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,
}

impl OutputCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let filter = extension_filter(&self.ext)?;
        let resolved = PathResolver::new(&session.config).resolve_write_path(
            &self.path,
            self.dir.as_deref(),
            &filter,
        )?;
        session.emit(&Report::Resolved(&resolved))
    }
}
