//! Extension allow-list checks.
//!
//! The allow-list is consulted before any filesystem probing so that a
//! malformed extension is never reported as a missing file.

use std::path::Path;

use crate::error::{Error, Result};

/// A case-insensitive set of permitted file suffixes.
///
/// Each entry includes the leading dot (`.osm`). Entries given without one
/// are accepted and normalized.
///
/// # Examples
///
/// ```
/// use modelpath::path::ExtensionFilter;
/// use std::path::Path;
///
/// let filter = ExtensionFilter::new([".OSM", "idf"]);
/// assert!(filter.matches(Path::new("office.osm")));
/// assert!(filter.matches(Path::new("office.IDF")));
/// assert!(!filter.matches(Path::new("office.epw")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    original: Vec<String>,
    lowered: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter from a list of suffixes.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let original: Vec<String> = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim();
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();
        let lowered = original.iter().map(|ext| ext.to_lowercase()).collect();
        Self { original, lowered }
    }

    /// Returns true if the filter carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// The suffixes as supplied, each with a leading dot.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.original
    }

    /// Returns true if `suffix` (with leading dot) is a member, ignoring case.
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        let suffix = suffix.to_lowercase();
        self.lowered.iter().any(|ext| *ext == suffix)
    }

    /// Returns true if the file name's suffix is a member.
    ///
    /// An empty filter matches everything; a file without a suffix matches
    /// only an empty filter.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if self.is_empty() {
            return true;
        }
        suffix_of(path).is_some_and(|suffix| self.contains(&suffix))
    }

    /// Enforce the allow-list on a normalized path.
    ///
    /// A path without a suffix passes; so does any path when the filter is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtension`] when the path has a suffix that
    /// is not a member.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        match suffix_of(path) {
            Some(suffix) if !self.contains(&suffix) => Err(Error::InvalidExtension {
                path: path.to_path_buf(),
                extension: suffix,
                allowed: self.original.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// The suffix of the final path component, with its leading dot.
///
/// Dotfiles such as `.bashrc` have no suffix.
///
/// # Examples
///
/// ```
/// use modelpath::path::extension::suffix_of;
/// use std::path::Path;
///
/// assert_eq!(suffix_of(Path::new("a/b/model.OSM")).as_deref(), Some(".OSM"));
/// assert_eq!(suffix_of(Path::new("archive.tar.gz")).as_deref(), Some(".gz"));
/// assert_eq!(suffix_of(Path::new(".bashrc")), None);
/// assert_eq!(suffix_of(Path::new("office")), None);
/// ```
#[must_use]
pub fn suffix_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
