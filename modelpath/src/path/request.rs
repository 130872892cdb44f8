//! Resolution requests.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::extension::ExtensionFilter;

/// The kinds of file read through the convenience entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// An OpenStudio model (`.osm`).
    Model,
    /// An EnergyPlus simulation input (`.idf`).
    #[value(name = "idf")]
    SimulationInput,
}

impl FileKind {
    /// The single extension accepted for this kind.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Model => ".osm",
            Self::SimulationInput => ".idf",
        }
    }

    /// Human-readable noun used in error messages.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Model => "OSM file",
            Self::SimulationInput => "IDF file",
        }
    }
}

/// What to resolve and how.
///
/// Built once with the `with_*` methods, then passed by reference to
/// [`PathResolver::resolve`](crate::path::PathResolver::resolve).
///
/// # Examples
///
/// ```
/// use modelpath::path::ResolutionRequest;
///
/// let request = ResolutionRequest::new("models/office.osm")
///     .with_extensions([".osm"])
///     .with_description("OSM file");
/// assert!(request.must_exist());
/// assert!(!request.fuzzy_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionRequest {
    raw: String,
    extensions: ExtensionFilter,
    description: String,
    must_exist: bool,
    enable_fuzzy: bool,
    default_dir: Option<PathBuf>,
}

impl ResolutionRequest {
    /// A must-exist lookup of `raw` with no extension filter.
    ///
    /// Suggestions are off; enable them with [`with_fuzzy`](Self::with_fuzzy)
    /// or use [`read`](Self::read).
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            extensions: ExtensionFilter::default(),
            description: "File".to_string(),
            must_exist: true,
            enable_fuzzy: false,
            default_dir: None,
        }
    }

    /// A read request for a fixed file kind, with suggestions on a miss.
    #[must_use]
    pub fn read(kind: FileKind, raw: impl Into<String>) -> Self {
        Self::new(raw)
            .with_extensions([kind.extension()])
            .with_description(kind.description())
            .with_fuzzy(true)
    }

    /// An output-mode request: never fails with `NotFound`.
    #[must_use]
    pub fn write(raw: impl Into<String>) -> Self {
        Self::new(raw)
            .with_must_exist(false)
            .with_description("Output file")
    }

    /// Restrict accepted suffixes.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = ExtensionFilter::new(extensions);
        self
    }

    /// Use an existing filter.
    #[must_use]
    pub fn with_filter(mut self, filter: ExtensionFilter) -> Self {
        self.extensions = filter;
        self
    }

    /// Noun used in failure messages, e.g. "OSM file".
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether a missing file is an error.
    #[must_use]
    pub fn with_must_exist(mut self, must_exist: bool) -> Self {
        self.must_exist = must_exist;
        self
    }

    /// Whether a `NotFound` carries suggestions.
    #[must_use]
    pub fn with_fuzzy(mut self, enable: bool) -> Self {
        self.enable_fuzzy = enable;
        self
    }

    /// Target directory for output mode. Ignored for must-exist lookups.
    #[must_use]
    pub fn with_default_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_dir = Some(dir.into());
        self
    }

    /// The path as supplied by the caller.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The extension allow-list.
    #[must_use]
    pub fn extensions(&self) -> &ExtensionFilter {
        &self.extensions
    }

    /// The failure-message noun.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a missing file is an error.
    #[must_use]
    pub fn must_exist(&self) -> bool {
        self.must_exist
    }

    /// Whether suggestions are computed on failure.
    #[must_use]
    pub fn fuzzy_enabled(&self) -> bool {
        self.enable_fuzzy
    }

    /// The output-mode target directory, if any.
    #[must_use]
    pub fn default_dir(&self) -> Option<&Path> {
        self.default_dir.as_deref()
    }
}
