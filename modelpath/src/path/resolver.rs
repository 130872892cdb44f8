//! The resolution engine.
//!
//! This module provides the `PathResolver` type, which turns a user-supplied
//! path string into an absolute path by searching the candidate roots.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;
use crate::error::{Error, NotFoundReport, Result};
use crate::path::extension::ExtensionFilter;
use crate::path::fuzzy::{FuzzyMatcher, Suggestion};
use crate::path::normalize::{absolutize, expand_tilde, normalize_host_path, resolve_components};
use crate::path::request::{FileKind, ResolutionRequest};
use crate::path::roots::{self, CandidateRoot};
use crate::path::types::{ResolutionOrigin, ResolvedPath};

/// Resolves requests against a configuration snapshot.
///
/// The resolver borrows its configuration and keeps no other state: the
/// candidate roots are recomputed from the filesystem on every call, so a
/// file created between two calls is found by the second.
///
/// Resolution proceeds as follows:
/// 1. Backslashes become slashes and drive letters are mapped under the
///    mount prefix.
/// 2. The extension allow-list is enforced, before any filesystem access.
/// 3. Absolute paths are taken as-is; other roots are never probed for them.
/// 4. Relative paths are tried under each existing root in priority order,
///    then under the current directory.
/// 5. In output mode a missing file is placed under the default directory
///    (or the output root) by its file name alone.
/// 6. Otherwise the lookup fails with `NotFound`, optionally carrying
///    suggestions.
///
/// # Examples
///
/// ```no_run
/// use modelpath::config::ResolverConfig;
/// use modelpath::path::{FileKind, PathResolver};
///
/// let config = ResolverConfig::for_workspace("/workspace");
/// let resolver = PathResolver::new(&config);
///
/// match resolver.resolve_read_path(FileKind::Model, "office.osm") {
///     Ok(resolved) => println!("{}", resolved.path().display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    config: &'a ResolverConfig,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver over `config`.
    #[must_use]
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this resolver reads.
    #[must_use]
    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// Resolve a request.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidExtension`] if the suffix is not allowed
    /// - [`Error::NotFound`] if a must-exist lookup finds nothing
    /// - [`Error::InvalidPath`] if `~` must be expanded without a known home
    ///   directory, or an output-mode input has no file name
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<ResolvedPath> {
        let normalized =
            normalize_host_path(request.raw(), self.config.mount_prefix.as_deref());
        request.extensions().validate(Path::new(&normalized))?;

        let path = expand_tilde(Path::new(&normalized))?;

        if path.is_absolute() {
            return self.resolve_absolute(request, &normalized, &path);
        }

        let roots = roots::candidate_roots(self.config);
        for root in &roots {
            let candidate = resolve_components(&root.path().join(&path));
            if candidate.exists() {
                log::debug!("Found {} under {}: {}", request.raw(), root.label(), candidate.display());
                return Ok(ResolvedPath::new(
                    candidate,
                    request.raw(),
                    ResolutionOrigin::Root(root.label()),
                ));
            }
        }

        match absolutize(&path) {
            Ok(candidate) if candidate.exists() => {
                log::debug!("Found {} in current directory", request.raw());
                return Ok(ResolvedPath::new(
                    candidate,
                    request.raw(),
                    ResolutionOrigin::CurrentDir,
                ));
            }
            Ok(_) => {}
            Err(e) => log::debug!("Skipping current-directory fallback: {e}"),
        }

        if !request.must_exist() {
            return self.synthesize(request, &path);
        }

        Err(self.not_found(request, &normalized, roots))
    }

    /// Resolve an existing file of a fixed kind, with suggestions on failure.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_read_path(&self, kind: FileKind, path: &str) -> Result<ResolvedPath> {
        self.resolve(&ResolutionRequest::read(kind, path))
    }

    /// Resolve a path to write to. Never fails with `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtension`] if the suffix is not allowed, or
    /// [`Error::InvalidPath`] if the input has no file name.
    pub fn resolve_write_path(
        &self,
        path: &str,
        default_dir: Option<&Path>,
        extensions: &ExtensionFilter,
    ) -> Result<ResolvedPath> {
        let mut request = ResolutionRequest::write(path).with_filter(extensions.clone());
        if let Some(dir) = default_dir {
            request = request.with_default_dir(dir);
        }
        self.resolve(&request)
    }

    /// Files resembling `path`, best first, without raising a failure.
    #[must_use]
    pub fn suggest_similar(&self, path: &str, extensions: &ExtensionFilter) -> Vec<Suggestion> {
        let normalized = normalize_host_path(path, self.config.mount_prefix.as_deref());
        FuzzyMatcher::from_settings(&self.config.fuzzy).suggest(
            &normalized,
            extensions,
            &roots::suggestion_roots(self.config),
        )
    }

    fn resolve_absolute(
        &self,
        request: &ResolutionRequest,
        normalized: &str,
        path: &Path,
    ) -> Result<ResolvedPath> {
        let path = resolve_components(path);

        if request.must_exist() {
            if path.exists() {
                return Ok(ResolvedPath::new(path, request.raw(), ResolutionOrigin::Absolute));
            }
            return Err(self.not_found(request, normalized, Vec::new()));
        }

        if let Some(parent) = path.parent() {
            ensure_dir(parent);
        }
        Ok(ResolvedPath::new(path, request.raw(), ResolutionOrigin::Absolute))
    }

    fn synthesize(&self, request: &ResolutionRequest, path: &Path) -> Result<ResolvedPath> {
        let Some(file_name) = path.file_name() else {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Output path has no file name".to_string(),
            });
        };

        let target_dir: PathBuf = match request.default_dir() {
            Some(dir) => absolutize(&expand_tilde(dir)?)?,
            None => self.config.output_root.clone(),
        };
        ensure_dir(&target_dir);

        let target = target_dir.join(file_name);
        log::debug!("Synthesized output path {}", target.display());
        Ok(ResolvedPath::new(target, request.raw(), ResolutionOrigin::Synthesized))
    }

    fn not_found(
        &self,
        request: &ResolutionRequest,
        normalized: &str,
        searched: Vec<CandidateRoot>,
    ) -> Error {
        let suggestions = if request.fuzzy_enabled() {
            self.suggest_similar(normalized, request.extensions())
        } else {
            Vec::new()
        };

        log::debug!(
            "{} not found after searching {} roots ({} suggestions)",
            request.raw(),
            searched.len(),
            suggestions.len()
        );

        Error::not_found(NotFoundReport {
            description: request.description().to_string(),
            requested: request.raw().to_string(),
            searched,
            suggestions,
        })
    }
}

/// Create `dir` if missing, ignoring failures.
fn ensure_dir(dir: &Path) {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return;
    }
    if let Err(e) = fs::create_dir_all(dir) {
        log::debug!("Could not create {}: {e}", dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::roots::RootLabel;
    use tempfile::TempDir;

    fn hermetic(temp: &TempDir) -> ResolverConfig {
        ResolverConfig::for_workspace(temp.path().join("ws"))
            .with_uploads_dir(temp.path().join("uploads"))
            .with_session_home(temp.path().join("session"))
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_absolute_existing_returned_unchanged() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let file = temp.path().join("abs.osm");
        touch(&file);

        let resolved = PathResolver::new(&config)
            .resolve(&ResolutionRequest::new(file.to_string_lossy()))
            .unwrap();
        assert_eq!(resolved.path(), file.as_path());
        assert_eq!(resolved.origin(), ResolutionOrigin::Absolute);
    }

    #[test]
    fn test_absolute_missing_is_not_found_without_search() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        // Same basename exists in a root, but absolute intent wins.
        touch(&config.workspace_root.join("abs.osm"));

        let missing = temp.path().join("elsewhere").join("abs.osm");
        let err = PathResolver::new(&config)
            .resolve(&ResolutionRequest::new(missing.to_string_lossy()).with_fuzzy(false))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.searched_roots().unwrap().len(), 0);
    }

    #[test]
    fn test_absolute_output_creates_parent() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let target = temp.path().join("new").join("dir").join("out.osm");

        let resolved = PathResolver::new(&config)
            .resolve_write_path(&target.to_string_lossy(), None, &ExtensionFilter::default())
            .unwrap();
        assert_eq!(resolved.path(), target.as_path());
        assert!(target.parent().unwrap().is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_priority_order_wins() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        touch(&config.workspace_root.join("x.osm"));
        touch(&config.sample_models_dir().join("x.osm"));

        let resolver = PathResolver::new(&config);
        for _ in 0..2 {
            let resolved = resolver.resolve_read_path(FileKind::Model, "x.osm").unwrap();
            assert_eq!(resolved.path(), config.sample_models_dir().join("x.osm"));
            assert_eq!(resolved.origin(), ResolutionOrigin::Root(RootLabel::SampleModels));
        }
    }

    #[test]
    fn test_later_root_used_when_earlier_lacks_file() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        fs::create_dir_all(&config.uploads_dir).unwrap();
        touch(&config.output_root.join("x.osm"));

        let resolved = PathResolver::new(&config)
            .resolve_read_path(FileKind::Model, "x.osm")
            .unwrap();
        assert_eq!(resolved.path(), config.output_root.join("x.osm"));
    }

    #[test]
    fn test_invalid_extension_precedes_filesystem() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);

        let err = PathResolver::new(&config)
            .resolve(&ResolutionRequest::new("missing/dir/model.txt").with_extensions([".osm"]))
            .unwrap_err();
        match err {
            Error::InvalidExtension { extension, allowed, .. } => {
                assert_eq!(extension, ".txt");
                assert_eq!(allowed, vec![".osm".to_string()]);
            }
            other => panic!("expected InvalidExtension, got {other:?}"),
        }
    }

    #[test]
    fn test_write_uses_basename_under_default_dir() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let dir = temp.path().join("results");

        let resolved = PathResolver::new(&config)
            .resolve_write_path("nested/parts/run.osm", Some(&dir), &ExtensionFilter::default())
            .unwrap();
        assert_eq!(resolved.path(), dir.join("run.osm"));
        assert_eq!(resolved.origin(), ResolutionOrigin::Synthesized);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_defaults_to_output_root() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);

        let resolved = PathResolver::new(&config)
            .resolve_write_path("run.osm", None, &ExtensionFilter::new([".osm"]))
            .unwrap();
        assert_eq!(resolved.path(), config.output_root.join("run.osm"));
        assert!(config.output_root.is_dir());
    }

    #[test]
    fn test_write_returns_existing_file_in_root() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let existing = config.workspace_root.join("keep.osm");
        touch(&existing);

        let resolved = PathResolver::new(&config)
            .resolve_write_path("keep.osm", None, &ExtensionFilter::default())
            .unwrap();
        assert_eq!(resolved.path(), existing.as_path());
    }

    #[test]
    fn test_not_found_lists_searched_roots_in_order() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        fs::create_dir_all(&config.uploads_dir).unwrap();
        fs::create_dir_all(&config.output_root).unwrap();

        let err = PathResolver::new(&config)
            .resolve(&ResolutionRequest::new("nope.osm").with_fuzzy(false))
            .unwrap_err();
        let labels: Vec<_> = err
            .searched_roots()
            .unwrap()
            .iter()
            .map(CandidateRoot::label)
            .collect();
        assert_eq!(
            labels,
            vec![RootLabel::Uploads, RootLabel::Outputs, RootLabel::Workspace]
        );
        assert!(err.suggestions().unwrap().is_empty());
    }

    #[test]
    fn test_not_found_carries_suggestions() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let office = config.workspace_root.join("office.osm");
        touch(&office);
        touch(&config.workspace_root.join("warehouse_large.osm"));

        let err = PathResolver::new(&config)
            .resolve_read_path(FileKind::Model, "offic.osm")
            .unwrap_err();
        let suggestions = err.suggestions().unwrap();
        assert_eq!(suggestions[0].path(), office.as_path());
        assert!(err.to_string().contains("Did you mean"));
    }

    #[test]
    fn test_no_stale_cache_between_calls() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        let resolver = PathResolver::new(&config);

        assert!(resolver
            .resolve_read_path(FileKind::Model, "f.osm")
            .unwrap_err()
            .is_not_found());

        touch(&config.uploads_dir.join("f.osm"));
        let resolved = resolver.resolve_read_path(FileKind::Model, "f.osm").unwrap();
        assert_eq!(resolved.path(), config.uploads_dir.join("f.osm"));
    }

    #[test]
    fn test_drive_letter_translated_before_search() {
        let temp = TempDir::new().unwrap();
        let mut config = hermetic(&temp);
        let mount = temp.path().join("mnt");
        config.mount_prefix = Some(mount.to_string_lossy().into_owned());
        let file = mount.join("c").join("Users").join("a").join("model.osm");
        touch(&file);

        let resolved = PathResolver::new(&config)
            .resolve_read_path(FileKind::Model, r"C:\Users\a\model.osm")
            .unwrap();
        assert_eq!(resolved.path(), file.as_path());
    }

    #[test]
    fn test_suggest_similar_standalone() {
        let temp = TempDir::new().unwrap();
        let config = hermetic(&temp);
        touch(&config.sample_models_dir().join("office.osm"));
        touch(&config.sample_models_dir().join("office.idf"));

        let suggestions = PathResolver::new(&config)
            .suggest_similar("offce.osm", &ExtensionFilter::new([".osm"]));
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].path().ends_with("office.osm"));
    }
}
