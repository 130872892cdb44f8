//! Resolution results.
//!
//! A [`ResolvedPath`] is what a successful resolution returns: the absolute
//! path, the input it came from, and which step of the search produced it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::roots::RootLabel;

/// Which step of the search produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "root", rename_all = "snake_case")]
pub enum ResolutionOrigin {
    /// The input was already absolute.
    Absolute,
    /// Found under a candidate root.
    Root(RootLabel),
    /// Found relative to the current working directory.
    CurrentDir,
    /// Synthesized for output under the default or output directory.
    Synthesized,
}

impl fmt::Display for ResolutionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute path"),
            Self::Root(label) => write!(f, "{label}"),
            Self::CurrentDir => write!(f, "current directory"),
            Self::Synthesized => write!(f, "new output path"),
        }
    }
}

/// A successfully resolved path.
///
/// # Examples
///
/// ```
/// use modelpath::path::{ResolutionOrigin, ResolvedPath};
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(
///     PathBuf::from("/ws/outputs/run.osm"),
///     "run.osm",
///     ResolutionOrigin::Synthesized,
/// );
/// assert_eq!(resolved.requested(), "run.osm");
/// assert!(resolved.path().is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    path: PathBuf,
    requested: String,
    origin: ResolutionOrigin,
}

impl ResolvedPath {
    /// Create a resolved path.
    #[must_use]
    pub fn new(path: PathBuf, requested: impl Into<String>, origin: ResolutionOrigin) -> Self {
        Self {
            path,
            requested: requested.into(),
            origin,
        }
    }

    /// The absolute resolved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path exactly as the caller supplied it.
    #[must_use]
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Which step of the search produced the path.
    #[must_use]
    pub fn origin(&self) -> ResolutionOrigin {
        self.origin
    }

    /// Consume and return the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
