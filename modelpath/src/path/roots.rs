//! Candidate search roots.
//!
//! The root list is recomputed from the configuration on every call and
//! filtered by what exists on disk at that moment. Nothing here is cached:
//! a directory created between two calls is seen by the second one.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ResolverConfig;

/// Which configured directory a candidate root came from.
///
/// Variants are declared in search priority order, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootLabel {
    /// Files the user just dropped off.
    Uploads,
    /// Home directory of the interactive session.
    SessionHome,
    /// `models` subdirectory of the sample library.
    SampleModels,
    /// Sample library root.
    SampleFiles,
    /// Output root.
    Outputs,
    /// Workspace root.
    Workspace,
    /// Additional directory walked only for suggestions.
    Extra,
}

impl fmt::Display for RootLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uploads => write!(f, "user uploads"),
            Self::SessionHome => write!(f, "session home"),
            Self::SampleModels => write!(f, "sample_files/models"),
            Self::SampleFiles => write!(f, "sample_files"),
            Self::Outputs => write!(f, "outputs"),
            Self::Workspace => write!(f, "workspace root"),
            Self::Extra => write!(f, "extra"),
        }
    }
}

/// A labelled directory considered during a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateRoot {
    label: RootLabel,
    path: PathBuf,
}

impl CandidateRoot {
    /// Create a candidate root.
    #[must_use]
    pub fn new(label: RootLabel, path: PathBuf) -> Self {
        Self { label, path }
    }

    /// Where this root came from.
    #[must_use]
    pub fn label(&self) -> RootLabel {
        self.label
    }

    /// The root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Every configured root in priority order, existing or not.
///
/// # Examples
///
/// ```
/// use modelpath::config::ResolverConfig;
/// use modelpath::path::{roots, RootLabel};
///
/// let config = ResolverConfig::for_workspace("/ws");
/// let labels: Vec<_> = roots::configured_roots(&config)
///     .iter()
///     .map(|r| r.label())
///     .collect();
/// assert_eq!(labels, vec![
///     RootLabel::Uploads,
///     RootLabel::SessionHome,
///     RootLabel::SampleModels,
///     RootLabel::SampleFiles,
///     RootLabel::Outputs,
///     RootLabel::Workspace,
/// ]);
/// ```
#[must_use]
pub fn configured_roots(config: &ResolverConfig) -> Vec<CandidateRoot> {
    vec![
        CandidateRoot::new(RootLabel::Uploads, config.uploads_dir.clone()),
        CandidateRoot::new(RootLabel::SessionHome, config.session_home.clone()),
        CandidateRoot::new(RootLabel::SampleModels, config.sample_models_dir()),
        CandidateRoot::new(RootLabel::SampleFiles, config.sample_root.clone()),
        CandidateRoot::new(RootLabel::Outputs, config.output_root.clone()),
        CandidateRoot::new(RootLabel::Workspace, config.workspace_root.clone()),
    ]
}

/// The roots to search right now: configured roots whose directory exists
/// at the moment of the call, in priority order.
#[must_use]
pub fn candidate_roots(config: &ResolverConfig) -> Vec<CandidateRoot> {
    configured_roots(config)
        .into_iter()
        .filter(|root| {
            let exists = root.path.is_dir();
            if !exists {
                log::debug!("Skipping {} root (absent): {}", root.label, root.path.display());
            }
            exists
        })
        .collect()
}

/// Directories walked for suggestions: the current candidate roots followed
/// by any existing extra directories, without repeats.
#[must_use]
pub fn suggestion_roots(config: &ResolverConfig) -> Vec<CandidateRoot> {
    let mut roots = candidate_roots(config);
    for dir in &config.fuzzy.extra_dirs {
        if dir.is_dir() && !roots.iter().any(|r| r.path == *dir) {
            roots.push(CandidateRoot::new(RootLabel::Extra, dir.clone()));
        }
    }
    roots
}
