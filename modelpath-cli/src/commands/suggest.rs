//! Command to list files with names similar to a reference.

use crate::error::CliError;
use crate::utils::{extension_filter, Session};
use clap::Args;
use modelpath::output::Report;
use modelpath::PathResolver;

/// Suggest existing files whose names resemble PATH.
#[derive(Args)]
pub struct SuggestCommand {
    /// File reference to match against
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Only consider files with this extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,

    /// Maximum number of suggestions
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Minimum similarity between 0.0 and 1.0
    #[arg(long, value_name = "RATIO")]
    pub threshold: Option<f64>,
}

impl SuggestCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let filter = extension_filter(&self.ext)?;

        let mut config = session.config.clone();
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(CliError::InvalidArguments(
                    "--limit must be at least 1".to_string(),
                ));
            }
            config.fuzzy.max_results = limit;
        }
        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(CliError::InvalidArguments(format!(
                    "--threshold must be between 0.0 and 1.0, got {threshold}"
                )));
            }
            config.fuzzy.threshold = threshold;
        }

        let suggestions = PathResolver::new(&config).suggest_similar(&self.path, &filter);
        session.emit(&Report::Suggestions {
            requested: &self.path,
            suggestions: &suggestions,
        })
    }
}
