//! Listing files by extension and by partial name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ResolverConfig;

/// Extensions searched by [`find_model_files_by_name`] when none are given.
pub const DEFAULT_MODEL_EXTENSIONS: [&str; 2] = [".osm", ".idf"];

/// Directories searched when the caller names none: workspace, then samples.
#[must_use]
pub fn default_search_dirs(config: &ResolverConfig) -> Vec<PathBuf> {
    vec![config.workspace_root.clone(), config.sample_root.clone()]
}

/// Every file under `dirs` whose name ends with `extension`, ignoring case.
///
/// Missing directories and unreadable entries are skipped. Directories are
/// walked in order and a file reachable from several is listed once.
///
/// # Examples
///
/// ```no_run
/// use modelpath::path::discovery::find_files_by_extension;
/// use std::path::PathBuf;
///
/// let weather = find_files_by_extension(".epw", &[PathBuf::from("/workspace")]);
/// ```
#[must_use]
pub fn find_files_by_extension(extension: &str, dirs: &[PathBuf]) -> Vec<PathBuf> {
    let extension = extension.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }

        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Cannot access entry under {}: {e}", dir.display());
                    continue;
                }
            };
            if entry.file_type().is_dir() || !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.ends_with(&extension) && seen.insert(entry.path().to_path_buf()) {
                found.push(entry.into_path());
            }
        }
    }

    found
}

/// Model files whose name contains `partial`, case-insensitively.
///
/// A name also matches when it contains every whitespace-separated word of
/// `partial`, so "san francisco" finds `USA_CA_San.Francisco.osm`. Results
/// are ordered by file-name length, then path.
#[must_use]
pub fn find_model_files_by_name(
    config: &ResolverConfig,
    partial: &str,
    extensions: &[String],
) -> Vec<PathBuf> {
    let dirs = default_search_dirs(config);
    let partial = partial.to_lowercase();
    let words: Vec<&str> = partial.split_whitespace().collect();

    let mut seen = HashSet::new();
    let mut matches: Vec<PathBuf> = Vec::new();

    let defaults: Vec<String> = DEFAULT_MODEL_EXTENSIONS.iter().map(ToString::to_string).collect();
    let extensions = if extensions.is_empty() { &defaults[..] } else { extensions };

    for ext in extensions {
        for path in find_files_by_extension(ext, &dirs) {
            let name = file_name_lower(&path);
            let hit = name.contains(&partial) || words.iter().all(|w| name.contains(w));
            if hit && seen.insert(path.clone()) {
                matches.push(path);
            }
        }
    }

    matches.sort_by(|a, b| {
        file_name_lower(a)
            .len()
            .cmp(&file_name_lower(b).len())
            .then_with(|| a.cmp(b))
    });
    matches
}

fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_find_by_extension_case_insensitive() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.OSM"));
        touch(&temp.path().join("sub/b.osm"));
        touch(&temp.path().join("c.idf"));

        let mut found = find_files_by_extension(".osm", &[temp.path().to_path_buf()]);
        found.sort();
        assert_eq!(
            found,
            vec![temp.path().join("a.OSM"), temp.path().join("sub/b.osm")]
        );
    }

    #[test]
    fn test_find_by_extension_skips_missing_and_dedups() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("inner/a.osm"));

        let dirs = vec![
            temp.path().join("missing"),
            temp.path().to_path_buf(),
            temp.path().join("inner"),
        ];
        assert_eq!(find_files_by_extension(".osm", &dirs).len(), 1);
    }

    #[test]
    fn test_find_model_files_by_name() {
        let temp = TempDir::new().unwrap();
        let config = ResolverConfig::for_workspace(temp.path());
        touch(&config.sample_models_dir().join("LargeOffice.osm"));
        touch(&config.sample_models_dir().join("office.idf"));
        touch(&config.workspace_root.join("warehouse.osm"));
        touch(&config.workspace_root.join("office.txt"));

        let found = find_model_files_by_name(&config, "Office", &[]);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["office.idf", "LargeOffice.osm"]);
    }

    #[test]
    fn test_find_model_files_by_words() {
        let temp = TempDir::new().unwrap();
        let config = ResolverConfig::for_workspace(temp.path());
        touch(&config.workspace_root.join("USA_CA_San.Francisco.osm"));

        let found = find_model_files_by_name(&config, "san francisco", &[".osm".to_string()]);
        assert_eq!(found.len(), 1);
    }
}
