//! Command to resolve an existing file.

use crate::error::CliError;
use crate::utils::{extension_filter, Session};
use clap::Args;
use modelpath::output::Report;
use modelpath::{FileKind, PathResolver, ResolutionRequest};

/// Resolve a reference to an existing file.
#[derive(Args)]
pub struct ResolveCommand {
    /// File reference: absolute, relative, `~`, or a Windows drive path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Kind of file expected; sets the allowed extension
    #[arg(long, value_enum, conflicts_with = "ext")]
    pub kind: Option<FileKind>,

    /// Allowed extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,

    /// Label used in error messages
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Do not compute suggestions when the file is missing
    #[arg(long)]
    pub no_fuzzy: bool,
}

impl ResolveCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let mut request = match self.kind {
            Some(kind) => ResolutionRequest::read(kind, self.path),
            None => ResolutionRequest::new(self.path).with_filter(extension_filter(&self.ext)?),
        }
        .with_fuzzy(!self.no_fuzzy);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }

        let resolved = PathResolver::new(&session.config).resolve(&request)?;
        log::info!("Resolved {} via {}", resolved.requested(), resolved.origin());
        session.emit(&Report::Resolved(&resolved))
    }
}
