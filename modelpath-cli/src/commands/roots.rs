//! Command to show the search roots.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use modelpath::output::{Report, RootStatus};

/// Show the search roots in priority order, then the extra suggestion
/// directories.
#[derive(Args)]
pub struct RootsCommand {}

impl RootsCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let roots = RootStatus::collect(&session.config);
        session.emit(&Report::Roots(&roots))
    }
}
