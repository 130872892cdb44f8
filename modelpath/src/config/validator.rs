//! Configuration validation.
//!
//! This module checks that configuration values are usable before they are
//! turned into a [`ResolverConfig`](crate::config::ResolverConfig).

use crate::config::schema::{Config, ContainerConfig, FuzzyConfig, PathsConfig};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use modelpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref paths) = config.paths {
            Self::validate_paths(paths)?;
        }

        if let Some(ref fuzzy) = config.fuzzy {
            Self::validate_fuzzy(fuzzy)?;
        }

        if let Some(ref container) = config.container {
            Self::validate_container(container)?;
        }

        Ok(())
    }

    fn validate_paths(paths: &PathsConfig) -> Result<()> {
        let named = [
            ("paths.workspace_root", &paths.workspace_root),
            ("paths.sample_root", &paths.sample_root),
            ("paths.output_root", &paths.output_root),
            ("paths.logs_dir", &paths.logs_dir),
            ("paths.uploads_dir", &paths.uploads_dir),
            ("paths.session_home", &paths.session_home),
        ];

        for (field, value) in named {
            if let Some(path) = value {
                Self::validate_root(field, path)?;
            }
        }

        Ok(())
    }

    fn validate_root(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if path.to_string_lossy().contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_fuzzy(fuzzy: &FuzzyConfig) -> Result<()> {
        if let Some(threshold) = fuzzy.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::Validation {
                    field: "fuzzy.threshold".into(),
                    message: format!("Must be between 0.0 and 1.0, got {threshold}"),
                });
            }
        }

        if fuzzy.max_results == Some(0) {
            return Err(Error::Validation {
                field: "fuzzy.max_results".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if fuzzy.max_entries == Some(0) {
            return Err(Error::Validation {
                field: "fuzzy.max_entries".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if let Some(ref dirs) = fuzzy.extra_dirs {
            for dir in dirs {
                Self::validate_root("fuzzy.extra_dirs", dir)?;
            }
        }

        Ok(())
    }

    fn validate_container(container: &ContainerConfig) -> Result<()> {
        if let Some(ref prefix) = container.mount_prefix {
            if !prefix.starts_with('/') {
                return Err(Error::Validation {
                    field: "container.mount_prefix".into(),
                    message: format!("Must be an absolute path, got '{prefix}'"),
                });
            }
            Self::validate_root("container.mount_prefix", &PathBuf::from(prefix))?;
        }

        Ok(())
    }
}
