//! Error types for the modelpath library.
//!
//! This module provides the error hierarchy for path resolution, discovery
//! and copy operations, using `thiserror` for ergonomic error handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::{CandidateRoot, Suggestion};

/// Number of suggestions rendered in a `NotFound` message.
const DISPLAYED_SUGGESTIONS: usize = 5;

/// Result type alias for operations that may fail with a modelpath error.
///
/// # Examples
///
/// ```
/// use modelpath::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the modelpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path's suffix is not in the extension allow-list.
    ///
    /// Raised before any filesystem access.
    #[error("{} has extension '{extension}', expected one of: {}", path.display(), allowed.join(", "))]
    InvalidExtension {
        /// The (normalized) path that was rejected.
        path: PathBuf,
        /// The offending suffix, including the leading dot.
        extension: String,
        /// The allow-list the suffix was checked against.
        allowed: Vec<String>,
    },

    /// A must-exist lookup exhausted every candidate root.
    #[error("{0}")]
    NotFound(Box<NotFoundReport>),

    /// Permission denied accessing or writing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A copy target already exists and overwriting was not requested.
    #[error("target file already exists: {} (use overwrite to replace it)", path.display())]
    TargetExists {
        /// The existing target.
        path: PathBuf,
    },

    /// A copy completed but the result did not match the source.
    #[error("copy verification failed: {details}")]
    CopyVerification {
        /// Details about the mismatch.
        details: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything known about a failed must-exist lookup.
///
/// Carries the ordered list of roots that were actually probed and, when
/// fuzzy matching was enabled, ranked near-miss suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundReport {
    /// Human-readable description of what was looked for (e.g. "OSM file").
    pub description: String,
    /// The path exactly as the caller supplied it.
    pub requested: String,
    /// Roots searched, in priority order.
    pub searched: Vec<CandidateRoot>,
    /// Ranked suggestions, best first. Empty when fuzzy matching was off.
    pub suggestions: Vec<Suggestion>,
}

impl fmt::Display for NotFoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found: {}", self.description, self.requested)?;

        if !self.suggestions.is_empty() {
            write!(f, "\nDid you mean one of these?")?;
            for suggestion in self.suggestions.iter().take(DISPLAYED_SUGGESTIONS) {
                write!(f, "\n  - {}", suggestion.path().display())?;
            }
            return Ok(());
        }

        if self.searched.is_empty() {
            return Ok(());
        }

        write!(f, "\nSearched in:")?;
        for root in &self.searched {
            write!(f, "\n  - {}: {}", root.label(), root.path().display())?;
        }
        Ok(())
    }
}

impl Error {
    /// Build a `NotFound` error from its report.
    #[must_use]
    pub fn not_found(report: NotFoundReport) -> Self {
        Self::NotFound(Box::new(report))
    }

    /// Check if error indicates a must-exist lookup failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelpath::error::{Error, NotFoundReport};
    ///
    /// let err = Error::not_found(NotFoundReport {
    ///     description: "OSM file".to_string(),
    ///     requested: "missing.osm".to_string(),
    ///     searched: Vec::new(),
    ///     suggestions: Vec::new(),
    /// });
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if error is an extension allow-list rejection.
    #[must_use]
    pub fn is_invalid_extension(&self) -> bool {
        matches!(self, Self::InvalidExtension { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Roots searched before a `NotFound` was raised.
    #[must_use]
    pub fn searched_roots(&self) -> Option<&[CandidateRoot]> {
        match self {
            Self::NotFound(report) => Some(&report.searched),
            _ => None,
        }
    }

    /// Suggestions attached to a `NotFound`, if any.
    #[must_use]
    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        match self {
            Self::NotFound(report) => Some(&report.suggestions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::RootLabel;

    fn report(suggestions: Vec<Suggestion>) -> NotFoundReport {
        NotFoundReport {
            description: "OSM file".to_string(),
            requested: "offic.osm".to_string(),
            searched: vec![
                CandidateRoot::new(RootLabel::SampleFiles, PathBuf::from("/ws/sample_files")),
                CandidateRoot::new(RootLabel::Workspace, PathBuf::from("/ws")),
            ],
            suggestions,
        }
    }

    #[test]
    fn test_invalid_extension_error() {
        let err = Error::InvalidExtension {
            path: PathBuf::from("model.txt"),
            extension: ".txt".to_string(),
            allowed: vec![".osm".to_string(), ".idf".to_string()],
        };
        let display = format!("{err}");
        assert!(display.contains(".txt"));
        assert!(display.contains(".osm, .idf"));
        assert!(err.is_invalid_extension());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_lists_searched_roots() {
        let err = Error::not_found(report(Vec::new()));
        let display = format!("{err}");
        assert!(display.contains("OSM file not found: offic.osm"));
        assert!(display.contains("Searched in:"));
        assert!(display.contains("sample_files: /ws/sample_files"));
        assert!(display.contains("workspace root: /ws"));
        assert_eq!(err.searched_roots().unwrap().len(), 2);
    }

    #[test]
    fn test_not_found_prefers_suggestions() {
        let suggestions = (0..8)
            .map(|i| Suggestion::new(PathBuf::from(format!("/ws/office{i}.osm")), 0.9))
            .collect();
        let err = Error::not_found(report(suggestions));
        let display = format!("{err}");
        assert!(display.contains("Did you mean"));
        assert!(!display.contains("Searched in:"));
        assert!(display.contains("office4.osm"));
        assert!(!display.contains("office5.osm"));
        assert_eq!(err.suggestions().unwrap().len(), 8);
    }

    #[test]
    fn test_not_found_without_roots() {
        let mut bare = report(Vec::new());
        bare.searched.clear();
        assert_eq!(format!("{bare}"), "OSM file not found: offic.osm");
    }

    #[test]
    fn test_accessors_on_other_variants() {
        let err = Error::PermissionDenied {
            path: PathBuf::from("/restricted"),
        };
        assert!(err.is_permission_denied());
        assert!(err.searched_roots().is_none());
        assert!(err.suggestions().is_none());
    }

    #[test]
    fn test_target_exists_error() {
        let err = Error::TargetExists {
            path: PathBuf::from("/out/model.osm"),
        };
        let display = format!("{err}");
        assert!(display.contains("already exists"));
        assert!(display.contains("/out/model.osm"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
