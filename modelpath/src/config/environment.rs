//! Environment variable handling for configuration overrides.
//!
//! This module provides support for MODELPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use modelpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric threshold, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_path_overrides(config);
        Self::apply_fuzzy_overrides(config)?;
        Self::apply_container_overrides(config)?;

        if let Ok(format) = env::var("MODELPATH_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: "MODELPATH_OUTPUT_FORMAT".into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    /// Apply root directory overrides.
    fn apply_path_overrides(config: &mut Config) {
        let mut paths = config.paths.clone().unwrap_or_default();
        let mut modified = false;

        let overrides = [
            ("MODELPATH_WORKSPACE_ROOT", &mut paths.workspace_root),
            ("MODELPATH_SAMPLE_ROOT", &mut paths.sample_root),
            ("MODELPATH_OUTPUT_ROOT", &mut paths.output_root),
            ("MODELPATH_LOGS_DIR", &mut paths.logs_dir),
            ("MODELPATH_UPLOADS_DIR", &mut paths.uploads_dir),
            ("MODELPATH_SESSION_HOME", &mut paths.session_home),
        ];

        for (key, slot) in overrides {
            if let Some(value) = env::var_os(key).filter(|v| !v.is_empty()) {
                *slot = Some(PathBuf::from(value));
                modified = true;
            }
        }

        if modified {
            config.paths = Some(paths);
        }
    }

    /// Apply fuzzy matching overrides.
    fn apply_fuzzy_overrides(config: &mut Config) -> Result<()> {
        let mut fuzzy = config.fuzzy.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(threshold) = env::var("MODELPATH_FUZZY_THRESHOLD") {
            fuzzy.threshold = Some(threshold.parse().map_err(|_| Error::Validation {
                field: "MODELPATH_FUZZY_THRESHOLD".into(),
                message: "Must be a number between 0.0 and 1.0".into(),
            })?);
            modified = true;
        }

        if let Ok(value) = env::var("MODELPATH_FUZZY_MAX_RESULTS") {
            fuzzy.max_results = Some(Self::parse_count("MODELPATH_FUZZY_MAX_RESULTS", &value)?);
            modified = true;
        }

        if let Ok(value) = env::var("MODELPATH_FUZZY_MAX_DEPTH") {
            fuzzy.max_depth = Some(Self::parse_count("MODELPATH_FUZZY_MAX_DEPTH", &value)?);
            modified = true;
        }

        if let Ok(value) = env::var("MODELPATH_FUZZY_MAX_ENTRIES") {
            fuzzy.max_entries = Some(Self::parse_count("MODELPATH_FUZZY_MAX_ENTRIES", &value)?);
            modified = true;
        }

        // MODELPATH_FUZZY_EXTRA_DIRS uses the platform path-list separator
        if let Some(value) = env::var_os("MODELPATH_FUZZY_EXTRA_DIRS") {
            let dirs: Vec<PathBuf> = env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !dirs.is_empty() {
                fuzzy.extra_dirs.get_or_insert_with(Vec::new).extend(dirs);
                modified = true;
            }
        }

        if modified {
            config.fuzzy = Some(fuzzy);
        }

        Ok(())
    }

    /// Apply host translation overrides.
    fn apply_container_overrides(config: &mut Config) -> Result<()> {
        let mut container = config.container.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(prefix) = env::var("MODELPATH_MOUNT_PREFIX") {
            container.mount_prefix = Some(prefix);
            modified = true;
        }

        if let Ok(val) = env::var("MODELPATH_TRANSLATE_DRIVE_LETTERS") {
            container.translate_drive_letters =
                Some(Self::parse_bool("MODELPATH_TRANSLATE_DRIVE_LETTERS", &val)?);
            modified = true;
        }

        if modified {
            config.container = Some(container);
        }

        Ok(())
    }

    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: "Must be a non-negative integer".into(),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
