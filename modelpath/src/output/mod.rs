//! Output formatting for resolution results.
//!
//! Results are rendered either for people (plain lines) or for machines
//! (pretty-printed JSON), selected by [`OutputFormat`].

mod formatters;

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{OutputFormat, ResolverConfig};
use crate::operations::CopyReport;
use crate::path::{roots, CandidateRoot, ResolvedPath, RootLabel, Suggestion};
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter};

/// Something the CLI prints.
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// A resolved path.
    Resolved(&'a ResolvedPath),
    /// Suggestions for a requested name.
    Suggestions {
        /// The name suggestions were computed for.
        requested: &'a str,
        /// Ranked suggestions, best first.
        suggestions: &'a [Suggestion],
    },
    /// A list of discovered files.
    Files(&'a [PathBuf]),
    /// The configured roots and whether each exists.
    Roots(&'a [RootStatus]),
    /// A completed copy.
    Copy(&'a CopyReport),
    /// A failure.
    Failure(&'a Error),
}

/// Trait for rendering a [`Report`].
pub trait OutputFormatter {
    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// A configured root and whether it currently exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootStatus {
    /// Where the root came from.
    pub label: RootLabel,
    /// The root directory.
    pub path: PathBuf,
    /// Whether the directory exists right now.
    pub exists: bool,
}

impl RootStatus {
    /// Every configured root in priority order, then the extra suggestion
    /// directories, each with its current existence.
    #[must_use]
    pub fn collect(config: &ResolverConfig) -> Vec<Self> {
        let extras = config
            .fuzzy
            .extra_dirs
            .iter()
            .map(|dir| CandidateRoot::new(RootLabel::Extra, dir.clone()));

        roots::configured_roots(config)
            .into_iter()
            .chain(extras)
            .map(|root| Self {
                label: root.label(),
                exists: root.path().is_dir(),
                path: root.path().to_path_buf(),
            })
            .collect()
    }
}
