//! Configuration schema definitions.
//!
//! This module defines the configuration structure for modelpath: the named
//! search roots, fuzzy-matching bounds, and host drive translation settings.
//! Every field is optional so that several sources can be layered; see
//! [`ResolverConfig`](crate::config::ResolverConfig) for the fully-defaulted
//! snapshot handed to the resolver.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use modelpath::config::{Config, PathsConfig};
/// use std::path::PathBuf;
///
/// let config = Config {
///     paths: Some(PathsConfig {
///         workspace_root: Some(PathBuf::from("/workspace")),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(config.fuzzy.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Named search roots.
    pub paths: Option<PathsConfig>,

    /// Near-match suggestion settings.
    pub fuzzy: Option<FuzzyConfig>,

    /// Host-to-container path translation settings.
    pub container: Option<ContainerConfig>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

/// Named root directories.
///
/// Unset roots are derived from `workspace_root` when the configuration is
/// resolved.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Workspace root; generic content lives here.
    pub workspace_root: Option<PathBuf>,

    /// Sample library root (defaults to `<workspace>/sample_files`).
    pub sample_root: Option<PathBuf>,

    /// Output root (defaults to `<workspace>/outputs`).
    pub output_root: Option<PathBuf>,

    /// Log directory (defaults to `<workspace>/logs`).
    pub logs_dir: Option<PathBuf>,

    /// Directory where users drop off files; searched first.
    pub uploads_dir: Option<PathBuf>,

    /// Home directory of the interactive session; searched second.
    pub session_home: Option<PathBuf>,
}

/// Fuzzy suggestion settings.
///
/// # Examples
///
/// ```
/// use modelpath::config::FuzzyConfig;
///
/// let config = FuzzyConfig {
///     threshold: Some(0.5),
///     max_results: Some(3),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FuzzyConfig {
    /// Minimum similarity ratio in `[0.0, 1.0]` for a suggestion.
    pub threshold: Option<f64>,

    /// Maximum number of suggestions returned.
    pub max_results: Option<usize>,

    /// Maximum directory depth walked below each root.
    pub max_depth: Option<usize>,

    /// Maximum number of directory entries visited across all roots.
    pub max_entries: Option<usize>,

    /// Directories walked in addition to the candidate roots.
    ///
    /// Accumulated across configuration sources.
    pub extra_dirs: Option<Vec<PathBuf>>,
}

/// Host drive-letter translation settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
    /// Prefix under which host drives are mounted (default `/mnt`).
    pub mount_prefix: Option<String>,

    /// Whether `C:/...` style paths are translated at all (default true).
    pub translate_drive_letters: Option<bool>,
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use modelpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one path per line.
    #[default]
    Human,
    /// JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
