//! Verified file copy between resolved locations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::path::{ExtensionFilter, PathResolver, ResolutionRequest};

/// Options for [`copy_file`].
///
/// # Examples
///
/// ```
/// use modelpath::operations::CopyOptions;
///
/// let options = CopyOptions::new("office", "copies/office.osm")
///     .with_overwrite(true)
///     .with_extensions([".osm"]);
/// assert!(options.overwrite);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CopyOptions {
    /// Source path; resolved as a must-exist lookup with suggestions.
    pub source: String,
    /// Target path; resolved in output mode.
    pub target: String,
    /// Replace an existing target.
    pub overwrite: bool,
    /// Allowed suffixes for both ends.
    pub extensions: ExtensionFilter,
}

impl CopyOptions {
    /// Copy `source` to `target` without overwriting.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            overwrite: false,
            extensions: ExtensionFilter::default(),
        }
    }

    /// Set whether an existing target is replaced.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Restrict both ends to these suffixes.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = ExtensionFilter::new(extensions);
        self
    }
}

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyReport {
    /// Resolved source file.
    pub source: PathBuf,
    /// Resolved target file.
    pub target: PathBuf,
    /// Bytes copied, verified against the source.
    pub size_bytes: u64,
    /// Whether an existing target was replaced.
    pub overwritten: bool,
    /// Wall-clock time spent resolving and copying.
    pub elapsed_seconds: f64,
    /// When the copy completed.
    pub copied_at: DateTime<Utc>,
}

/// Copy a file, resolving both ends against the candidate roots.
///
/// Unlike incidental directory creation during output-mode resolution,
/// failure to create the target directory or write the target is reported.
///
/// # Errors
///
/// Returns:
/// - [`Error::NotFound`] or [`Error::InvalidExtension`] from resolving either end
/// - [`Error::InvalidPath`] if the source is not a regular file, or source
///   and target are the same file
/// - [`Error::TargetExists`] if the target exists and `overwrite` is false
/// - [`Error::PermissionDenied`] if the source cannot be read or the target
///   cannot be written
/// - [`Error::CopyVerification`] if the copied size differs from the source
pub fn copy_file(config: &ResolverConfig, options: &CopyOptions) -> Result<CopyReport> {
    let started = Instant::now();
    let resolver = PathResolver::new(config);

    log::info!("Resolving source file: {}", options.source);
    let source = resolver
        .resolve(
            &ResolutionRequest::new(options.source.as_str())
                .with_filter(options.extensions.clone())
                .with_description("Source file")
                .with_fuzzy(true),
        )?
        .into_path_buf();

    if !source.is_file() {
        return Err(Error::InvalidPath {
            path: source,
            reason: "Source is not a regular file".to_string(),
        });
    }
    let source_size = fs::metadata(&source).map_err(|e| visible(e, &source))?.len();

    log::info!("Resolving target file: {}", options.target);
    let target = resolver
        .resolve(
            &ResolutionRequest::write(options.target.as_str())
                .with_filter(options.extensions.clone())
                .with_description("Target file"),
        )?
        .into_path_buf();

    let exists = target.exists();
    if exists && !options.overwrite {
        return Err(Error::TargetExists { path: target });
    }
    if exists && same_file(&source, &target) {
        return Err(Error::InvalidPath {
            path: target,
            reason: "Source and target are the same file".to_string(),
        });
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| visible(e, parent))?;
    }

    log::info!("Copying {} -> {}", source.display(), target.display());
    fs::copy(&source, &target).map_err(|e| visible(e, &target))?;

    let copied = fs::metadata(&target).map_err(|e| visible(e, &target))?.len();
    if copied != source_size {
        return Err(Error::CopyVerification {
            details: format!(
                "{} is {copied} bytes, expected {source_size}",
                target.display()
            ),
        });
    }

    Ok(CopyReport {
        source,
        target,
        size_bytes: copied,
        overwritten: exists,
        elapsed_seconds: started.elapsed().as_secs_f64(),
        copied_at: Utc::now(),
    })
}

/// Map an I/O error so permission problems surface as such.
fn visible(error: io::Error, path: &Path) -> Error {
    if error.kind() == io::ErrorKind::PermissionDenied {
        Error::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io(error)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
