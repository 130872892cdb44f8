//! Fully-defaulted configuration snapshot.
//!
//! A [`ResolverConfig`] is what every resolution call receives. It holds
//! plain directory paths only; whether those directories exist is checked
//! by the resolver on each call, never here.

use crate::config::schema::Config;
use crate::error::Result;
use crate::path::fuzzy::SearchBudget;
use crate::path::normalize::{expand_tilde, resolve_components, DEFAULT_MOUNT_PREFIX};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root used when it exists and nothing else is configured.
pub const DEFAULT_WORKSPACE_ROOT: &str = "/workspace";

/// Directory name of a modelpath checkout; running from inside one makes
/// its parent the fallback workspace.
pub const CHECKOUT_DIR_NAME: &str = "modelpath";

/// Default user drop-off directory.
pub const DEFAULT_UPLOADS_DIR: &str = "/mnt/user-data/uploads";

/// Default interactive-session home directory.
pub const DEFAULT_SESSION_HOME: &str = "/home/claude";

/// Default minimum similarity for suggestions.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Default maximum number of suggestions.
pub const DEFAULT_FUZZY_MAX_RESULTS: usize = 10;

/// Fuzzy matching settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzySettings {
    /// Minimum similarity ratio for a suggestion.
    pub threshold: f64,
    /// Maximum number of suggestions.
    pub max_results: usize,
    /// Bounds on the directory walk.
    pub budget: SearchBudget,
    /// Directories walked after the candidate roots.
    pub extra_dirs: Vec<PathBuf>,
}

impl Default for FuzzySettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
            max_results: DEFAULT_FUZZY_MAX_RESULTS,
            budget: SearchBudget::default(),
            extra_dirs: Vec::new(),
        }
    }
}

/// Immutable configuration passed into every resolution call.
///
/// # Examples
///
/// ```
/// use modelpath::config::ResolverConfig;
/// use std::path::Path;
///
/// let config = ResolverConfig::for_workspace("/srv/ws");
/// assert_eq!(config.sample_root, Path::new("/srv/ws/sample_files"));
/// assert_eq!(config.output_root, Path::new("/srv/ws/outputs"));
/// assert_eq!(config.sample_models_dir(), Path::new("/srv/ws/sample_files/models"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverConfig {
    /// Workspace root.
    pub workspace_root: PathBuf,
    /// Sample library root.
    pub sample_root: PathBuf,
    /// Output root; default target directory for output-mode resolution.
    pub output_root: PathBuf,
    /// Log directory.
    pub logs_dir: PathBuf,
    /// User drop-off directory.
    pub uploads_dir: PathBuf,
    /// Interactive-session home directory.
    pub session_home: PathBuf,
    /// Fuzzy matching settings.
    pub fuzzy: FuzzySettings,
    /// Prefix for drive-letter translation; `None` disables it.
    pub mount_prefix: Option<String>,
}

impl ResolverConfig {
    /// Build a configuration whose derived roots sit under `root`.
    ///
    /// The drop-off and session directories keep their fixed defaults.
    #[must_use]
    pub fn for_workspace(root: impl Into<PathBuf>) -> Self {
        let workspace_root = root.into();
        Self {
            sample_root: workspace_root.join("sample_files"),
            output_root: workspace_root.join("outputs"),
            logs_dir: workspace_root.join("logs"),
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            session_home: PathBuf::from(DEFAULT_SESSION_HOME),
            fuzzy: FuzzySettings::default(),
            mount_prefix: Some(DEFAULT_MOUNT_PREFIX.to_string()),
            workspace_root,
        }
    }

    /// Resolve a layered [`Config`] into a snapshot.
    ///
    /// Relative and `~` paths are anchored at `working_dir` and the home
    /// directory respectively.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured path starts with `~` and the home
    /// directory cannot be determined.
    pub fn from_config(config: &Config, working_dir: &Path) -> Result<Self> {
        let paths = config.paths.clone().unwrap_or_default();
        let anchor = |p: &Path| -> Result<PathBuf> {
            let expanded = expand_tilde(p)?;
            Ok(resolve_components(&working_dir.join(expanded)))
        };

        let workspace_root = match paths.workspace_root {
            Some(ref p) => anchor(p)?,
            None => detect_workspace_root(working_dir),
        };

        let mut resolved = Self::for_workspace(workspace_root);

        if let Some(ref p) = paths.sample_root {
            resolved.sample_root = anchor(p)?;
        }
        if let Some(ref p) = paths.output_root {
            resolved.output_root = anchor(p)?;
        }
        if let Some(ref p) = paths.logs_dir {
            resolved.logs_dir = anchor(p)?;
        }
        if let Some(ref p) = paths.uploads_dir {
            resolved.uploads_dir = anchor(p)?;
        }
        if let Some(ref p) = paths.session_home {
            resolved.session_home = anchor(p)?;
        }

        if let Some(ref fuzzy) = config.fuzzy {
            if let Some(threshold) = fuzzy.threshold {
                resolved.fuzzy.threshold = threshold;
            }
            if let Some(max_results) = fuzzy.max_results {
                resolved.fuzzy.max_results = max_results;
            }
            resolved.fuzzy.budget = SearchBudget {
                max_depth: fuzzy.max_depth,
                max_entries: fuzzy.max_entries,
            };
            if let Some(ref dirs) = fuzzy.extra_dirs {
                resolved.fuzzy.extra_dirs = dirs
                    .iter()
                    .map(|d| anchor(d))
                    .collect::<Result<Vec<_>>>()?;
            }
        }

        if let Some(ref container) = config.container {
            if container.translate_drive_letters == Some(false) {
                resolved.mount_prefix = None;
            } else if let Some(ref prefix) = container.mount_prefix {
                resolved.mount_prefix = Some(prefix.clone());
            }
        }

        Ok(resolved)
    }

    /// Replace the user drop-off directory.
    #[must_use]
    pub fn with_uploads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.uploads_dir = dir.into();
        self
    }

    /// Replace the interactive-session home directory.
    #[must_use]
    pub fn with_session_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_home = dir.into();
        self
    }

    /// Replace the fuzzy matching settings.
    #[must_use]
    pub fn with_fuzzy(mut self, fuzzy: FuzzySettings) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// The `models` subdirectory of the sample library.
    #[must_use]
    pub fn sample_models_dir(&self) -> PathBuf {
        self.sample_root.join("models")
    }

    /// Create the sample, output and log directories if missing.
    ///
    /// Best-effort: failures (read-only mounts, missing permissions) are
    /// logged and ignored.
    pub fn bootstrap_directories(&self) {
        for dir in [&self.sample_root, &self.output_root, &self.logs_dir] {
            if let Err(e) = fs::create_dir_all(dir) {
                log::debug!("Could not create {}: {e}", dir.display());
            }
        }
    }
}

/// Pick the workspace root when none is configured.
///
/// Uses [`DEFAULT_WORKSPACE_ROOT`] when it exists, else
/// [`fallback_workspace_root`].
fn detect_workspace_root(working_dir: &Path) -> PathBuf {
    let default = Path::new(DEFAULT_WORKSPACE_ROOT);
    if default.is_dir() {
        default.to_path_buf()
    } else {
        fallback_workspace_root(working_dir)
    }
}

/// `working_dir`, or its parent when `working_dir` is a checkout named
/// [`CHECKOUT_DIR_NAME`].
fn fallback_workspace_root(working_dir: &Path) -> PathBuf {
    match (working_dir.file_name(), working_dir.parent()) {
        (Some(name), Some(parent)) if name == CHECKOUT_DIR_NAME => parent.to_path_buf(),
        _ => working_dir.to_path_buf(),
    }
}
