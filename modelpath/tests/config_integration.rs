//! Integration tests for the configuration system.
//!
//! This test suite validates the complete workflow of the configuration system,
//! including file discovery, merging, environment variable handling, and
//! resolution into a `ResolverConfig`.
//!
//! Tests that modify environment variables are marked with `#[serial]` so
//! they run sequentially; environment variables are process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use modelpath::config::{Config, ConfigBuilder, FuzzyConfig, OutputFormat, PathsConfig};
use modelpath::error::Error;

// ============================================================================
// Test Utilities
// ============================================================================

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// A temp dir with an isolated HOME so user config never leaks in.
fn isolated_home() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::new("HOME", temp.path().join("home"));
    (temp, guard)
}

// ============================================================================
// File Discovery
// ============================================================================

#[test]
#[serial]
fn test_project_config_found_from_subdirectory() {
    let (temp, _home) = isolated_home();
    let project = temp.path().join("project");
    write_config(
        &project,
        "modelpath.yaml",
        "paths:\n  workspace_root: /srv/models\nfuzzy:\n  threshold: 0.45\n",
    );
    let nested = project.join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let resolver = ConfigBuilder::new()
        .with_working_dir(&nested)
        .skip_env()
        .build_resolver()
        .unwrap();

    assert_eq!(resolver.workspace_root, PathBuf::from("/srv/models"));
    assert_eq!(resolver.sample_root, PathBuf::from("/srv/models/sample_files"));
    assert!((resolver.fuzzy.threshold - 0.45).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_relative_roots_anchored_at_config_file() {
    let (temp, _home) = isolated_home();
    let project = temp.path().join("project");
    write_config(
        &project,
        "modelpath.yaml",
        "paths:\n  workspace_root: .\n  output_root: build/out\nfuzzy:\n  extra_dirs: [../shared]\n",
    );
    let nested = project.join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let resolver = ConfigBuilder::new()
        .with_working_dir(&nested)
        .skip_env()
        .build_resolver()
        .unwrap();

    assert_eq!(resolver.workspace_root, project);
    assert_eq!(resolver.sample_root, project.join("sample_files"));
    assert_eq!(resolver.output_root, project.join("build").join("out"));
    assert_eq!(resolver.fuzzy.extra_dirs, vec![temp.path().join("shared")]);
}

#[test]
#[serial]
fn test_user_config_overridden_by_project_config() {
    let (temp, _home) = isolated_home();
    write_config(
        &temp.path().join("home").join(".modelpath"),
        "config.yaml",
        "fuzzy:\n  threshold: 0.2\n  max_results: 4\n  extra_dirs: [/user/lib]\n",
    );
    let project = temp.path().join("project");
    write_config(
        &project,
        "modelpath.yaml",
        "fuzzy:\n  threshold: 0.6\n  extra_dirs: [/project/lib]\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(&project)
        .skip_env()
        .build()
        .unwrap();

    let fuzzy = config.fuzzy.unwrap();
    assert_eq!(fuzzy.threshold, Some(0.6));
    assert_eq!(fuzzy.max_results, Some(4));
    assert_eq!(
        fuzzy.extra_dirs,
        Some(vec![PathBuf::from("/user/lib"), PathBuf::from("/project/lib")])
    );
}

#[test]
#[serial]
fn test_explicit_file_beats_project_config() {
    let (temp, _home) = isolated_home();
    let project = temp.path().join("project");
    write_config(&project, "modelpath.yaml", "output_format: human\n");
    let explicit = write_config(temp.path(), "ci.yaml", "output_format: json\n");

    let config = ConfigBuilder::new()
        .with_working_dir(&project)
        .with_config_file(&explicit)
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
#[serial]
fn test_unknown_field_rejected() {
    let (temp, _home) = isolated_home();
    write_config(temp.path(), "modelpath.yaml", "paths:\n  workspace: /typo\n");

    let err = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_env_beats_files_and_overrides_beat_env() {
    let (temp, _home) = isolated_home();
    write_config(
        temp.path(),
        "modelpath.yaml",
        "paths:\n  output_root: /from/file\n  sample_root: /samples/file\n",
    );
    let _out = EnvGuard::new("MODELPATH_OUTPUT_ROOT", "/from/env");
    let _samples = EnvGuard::new("MODELPATH_SAMPLE_ROOT", "/samples/env");

    let resolver = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_config(Config {
            paths: Some(PathsConfig {
                sample_root: Some(PathBuf::from("/samples/override")),
                ..Default::default()
            }),
            ..Default::default()
        })
        .build_resolver()
        .unwrap();

    assert_eq!(resolver.output_root, PathBuf::from("/from/env"));
    assert_eq!(resolver.sample_root, PathBuf::from("/samples/override"));
}

#[test]
#[serial]
fn test_invalid_env_threshold_rejected() {
    let (_temp, _home) = isolated_home();
    let _t = EnvGuard::new("MODELPATH_FUZZY_THRESHOLD", "lots");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_env_disables_drive_translation() {
    let (_temp, _home) = isolated_home();
    let _t = EnvGuard::new("MODELPATH_TRANSLATE_DRIVE_LETTERS", "false");

    let resolver = ConfigBuilder::new()
        .with_working_dir(Path::new("/"))
        .skip_files()
        .build_resolver()
        .unwrap();
    assert_eq!(resolver.mount_prefix, None);
}

// ============================================================================
// Validation and Resolution
// ============================================================================

#[test]
fn test_out_of_range_threshold_rejected() {
    let err = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            fuzzy: Some(FuzzyConfig {
                threshold: Some(1.01),
                ..Default::default()
            }),
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "fuzzy.threshold"));
}

#[test]
fn test_budget_and_limits_reach_resolver() {
    let resolver = ConfigBuilder::new()
        .with_working_dir(Path::new("/project"))
        .skip_files()
        .skip_env()
        .with_config(Config {
            paths: Some(PathsConfig {
                workspace_root: Some(PathBuf::from("ws")),
                ..Default::default()
            }),
            fuzzy: Some(FuzzyConfig {
                max_results: Some(3),
                max_depth: Some(4),
                max_entries: Some(10_000),
                ..Default::default()
            }),
            ..Default::default()
        })
        .build_resolver()
        .unwrap();

    assert_eq!(resolver.workspace_root, PathBuf::from("/project/ws"));
    assert_eq!(resolver.fuzzy.max_results, 3);
    assert_eq!(resolver.fuzzy.budget.max_depth, Some(4));
    assert_eq!(resolver.fuzzy.budget.max_entries, Some(10_000));
}
