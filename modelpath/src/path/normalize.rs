//! Path normalization functions.
//!
//! This module provides functionality to normalize user-supplied paths by:
//! - Rewriting host-style separators (`\`) to forward slashes
//! - Translating host drive-letter paths (`C:/...`) to a container mount
//! - Expanding tilde (~) to the home directory
//! - Making paths absolute and resolving `.` and `..` components
//!
//! Host translation is purely textual: it never touches the filesystem.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Default prefix under which host drives are mounted in the container.
pub const DEFAULT_MOUNT_PREFIX: &str = "/mnt";

/// Rewrite host path syntax into the runtime's native form.
///
/// Backslashes become forward slashes. When `mount_prefix` is given, a path
/// beginning (case-insensitively) with a single ASCII letter followed by
/// `:/` is rewritten to `{mount_prefix}/{letter}/{rest}` with the letter
/// lower-cased.
///
/// # Examples
///
/// ```
/// use modelpath::path::normalize::normalize_host_path;
///
/// assert_eq!(
///     normalize_host_path(r"C:\Users\a\model.osm", Some("/mnt")),
///     "/mnt/c/Users/a/model.osm"
/// );
/// assert_eq!(normalize_host_path(r"models\office.osm", Some("/mnt")), "models/office.osm");
/// assert_eq!(normalize_host_path("D:/data/x.idf", None), "D:/data/x.idf");
/// ```
#[must_use]
pub fn normalize_host_path(raw: &str, mount_prefix: Option<&str>) -> String {
    let slashed = if raw.contains('\\') {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    };

    let Some(prefix) = mount_prefix else {
        return slashed;
    };

    match translate_drive_letter(&slashed, prefix) {
        Some(translated) => {
            log::info!("Translated host path to container path: {raw} -> {translated}");
            translated
        }
        None => slashed,
    }
}

/// Translate a forward-slashed drive-letter path to its mounted equivalent.
///
/// Returns `None` when the path does not start with `<letter>:/`.
///
/// # Examples
///
/// ```
/// use modelpath::path::normalize::translate_drive_letter;
///
/// assert_eq!(
///     translate_drive_letter("c:/work/a.osm", "/mnt").as_deref(),
///     Some("/mnt/c/work/a.osm")
/// );
/// assert_eq!(translate_drive_letter("/already/unix", "/mnt"), None);
/// assert_eq!(translate_drive_letter("ab:/not/a/drive", "/mnt"), None);
/// ```
#[must_use]
pub fn translate_drive_letter(path: &str, mount_prefix: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.len() < 3 || !bytes[0].is_ascii_alphabetic() || &bytes[1..3] != b":/" {
        return None;
    }

    let drive = char::from(bytes[0].to_ascii_lowercase());
    let prefix = mount_prefix.trim_end_matches('/');
    Some(format!("{prefix}/{drive}/{}", &path[3..]))
}

/// Expand tilde (~) to the home directory.
///
/// Only a leading component that is exactly `~` is expanded, so `~` and
/// `~/path` change while `~backup.osm` or `~user/path` are returned as
/// literal relative paths.
///
/// # Errors
///
/// Returns an error if the path needs expanding and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use modelpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/models")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("models"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
///
/// let literal = expand_tilde(Path::new("~backup.osm")).unwrap();
/// assert_eq!(literal, Path::new("~backup.osm"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Cannot determine home directory".to_string(),
            })?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Resolve `.` and `..` components lexically.
///
/// `..` at the root stays at the root, the way `/..` does on Unix.
/// Symlinks are never consulted.
///
/// # Examples
///
/// ```
/// use modelpath::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                result.push(component);
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !result.has_root() {
                    result.push("..");
                }
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    result
}

/// Make a path absolute against the current directory, then resolve
/// `.` and `..` components.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```no_run
/// use modelpath::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./models/office.osm")).unwrap();
/// assert!(absolute.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(resolve_components(&cwd.join(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_become_slashes() {
        assert_eq!(normalize_host_path(r"a\b\c.osm", None), "a/b/c.osm");
    }

    #[test]
    fn test_drive_letter_translation() {
        assert_eq!(
            normalize_host_path(r"C:\Users\a\model.osm", Some(DEFAULT_MOUNT_PREFIX)),
            "/mnt/c/Users/a/model.osm"
        );
    }

    #[test]
    fn test_drive_letter_any_letter_case_insensitive() {
        assert_eq!(
            normalize_host_path("D:/Projects/x.idf", Some("/mnt")),
            "/mnt/d/Projects/x.idf"
        );
        assert_eq!(
            normalize_host_path("e:/x.idf", Some("/mnt/")),
            "/mnt/e/x.idf"
        );
    }

    #[test]
    fn test_drive_letter_requires_slash() {
        assert_eq!(normalize_host_path("C:model.osm", Some("/mnt")), "C:model.osm");
        assert_eq!(normalize_host_path("C:", Some("/mnt")), "C:");
    }

    #[test]
    fn test_translation_disabled() {
        assert_eq!(normalize_host_path(r"C:\x.osm", None), "C:/x.osm");
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert_eq!(normalize_host_path("é:/x", Some("/mnt")), "é:/x");
        assert_eq!(normalize_host_path("", Some("/mnt")), "");
    }

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
        assert_eq!(expand_tilde(Path::new("~/test")).unwrap(), home.join("test"));
    }

    #[test]
    fn test_expand_tilde_leaves_other_tilde_names_literal() {
        assert_eq!(
            expand_tilde(Path::new("~user/path")).unwrap(),
            PathBuf::from("~user/path")
        );
        assert_eq!(
            expand_tilde(Path::new("~backup.osm")).unwrap(),
            PathBuf::from("~backup.osm")
        );
        assert_eq!(
            expand_tilde(Path::new("models/~")).unwrap(),
            PathBuf::from("models/~")
        );
    }

    #[test]
    fn test_resolve_components_simple() {
        assert_eq!(
            resolve_components(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
    }

    #[test]
    fn test_resolve_components_clamps_at_root() {
        assert_eq!(resolve_components(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(resolve_components(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_relative() {
        assert_eq!(resolve_components(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(resolve_components(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = env::current_dir().unwrap();
        let absolute = absolutize(Path::new("relative/./path")).unwrap();
        assert!(absolute.is_absolute());
        assert!(absolute.starts_with(&cwd));
        assert!(absolute.ends_with("relative/path"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_absolute() {
        assert_eq!(
            absolutize(Path::new("/a/b/../c")).unwrap(),
            PathBuf::from("/a/c")
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_ -]{1,10}"
        }

        proptest! {
            /// Normalized output never contains a backslash.
            #[test]
            fn no_backslashes_survive(parts in prop::collection::vec(segment(), 1..6)) {
                let raw = parts.join("\\");
                let normalized = normalize_host_path(&raw, Some("/mnt"));
                prop_assert!(!normalized.contains('\\'));
            }

            /// Host normalization is idempotent.
            #[test]
            fn normalize_host_idempotent(
                drive in "[a-zA-Z]",
                parts in prop::collection::vec(segment(), 0..5),
            ) {
                let raw = format!("{drive}:\\{}", parts.join("\\"));
                let once = normalize_host_path(&raw, Some("/mnt"));
                let twice = normalize_host_path(&once, Some("/mnt"));
                prop_assert_eq!(once.clone(), twice);
                let expected_prefix = format!("/mnt/{}/", drive.to_ascii_lowercase());
                prop_assert!(once.starts_with(&expected_prefix));
            }

            /// Lexical resolution never leaves `.` or `..` in absolute paths.
            #[cfg(unix)]
            #[test]
            fn resolved_absolute_has_no_dots(
                parts in prop::collection::vec(
                    prop_oneof![Just(".".to_string()), Just("..".to_string()), segment()],
                    1..8,
                )
            ) {
                let path = PathBuf::from(format!("/{}", parts.join("/")));
                let resolved = resolve_components(&path);
                prop_assert!(resolved.is_absolute());
                for component in resolved.components() {
                    prop_assert_ne!(component, Component::CurDir);
                    prop_assert_ne!(component, Component::ParentDir);
                }
            }
        }
    }
}
