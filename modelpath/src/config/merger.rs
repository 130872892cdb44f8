//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for accumulated fields like `fuzzy.extra_dirs`.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, ContainerConfig, FuzzyConfig, PathsConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use modelpath::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Human), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested configs: field-by-field merge
    /// - Fuzzy extra directories: accumulated, duplicates dropped
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref paths) = source.paths {
            Self::merge_paths(target.paths.get_or_insert_with(Default::default), paths);
        }

        if let Some(ref fuzzy) = source.fuzzy {
            Self::merge_fuzzy(target.fuzzy.get_or_insert_with(Default::default), fuzzy);
        }

        if let Some(ref container) = source.container {
            Self::merge_container(
                target.container.get_or_insert_with(Default::default),
                container,
            );
        }
    }

    fn merge_paths(target: &mut PathsConfig, source: &PathsConfig) {
        let pairs = [
            (&mut target.workspace_root, &source.workspace_root),
            (&mut target.sample_root, &source.sample_root),
            (&mut target.output_root, &source.output_root),
            (&mut target.logs_dir, &source.logs_dir),
            (&mut target.uploads_dir, &source.uploads_dir),
            (&mut target.session_home, &source.session_home),
        ];

        for (slot, value) in pairs {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
    }

    fn merge_fuzzy(target: &mut FuzzyConfig, source: &FuzzyConfig) {
        if source.threshold.is_some() {
            target.threshold = source.threshold;
        }
        if source.max_results.is_some() {
            target.max_results = source.max_results;
        }
        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }
        if source.max_entries.is_some() {
            target.max_entries = source.max_entries;
        }

        if let Some(ref extra) = source.extra_dirs {
            let dirs = target.extra_dirs.get_or_insert_with(Vec::new);
            for dir in extra {
                if !dirs.contains(dir) {
                    dirs.push(dir.clone());
                }
            }
        }
    }

    fn merge_container(target: &mut ContainerConfig, source: &ContainerConfig) {
        if source.mount_prefix.is_some() {
            target.mount_prefix.clone_from(&source.mount_prefix);
        }
        if source.translate_drive_letters.is_some() {
            target.translate_drive_letters = source.translate_drive_letters;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_paths_merge_field_by_field() {
        let low = Config {
            paths: Some(PathsConfig {
                workspace_root: Some(PathBuf::from("/low/ws")),
                sample_root: Some(PathBuf::from("/low/samples")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let high = Config {
            paths: Some(PathsConfig {
                workspace_root: Some(PathBuf::from("/high/ws")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        let paths = merged.paths.unwrap();
        assert_eq!(paths.workspace_root, Some(PathBuf::from("/high/ws")));
        assert_eq!(paths.sample_root, Some(PathBuf::from("/low/samples")));
    }

    #[test]
    fn test_extra_dirs_accumulate() {
        let low = Config {
            fuzzy: Some(FuzzyConfig {
                extra_dirs: Some(vec![PathBuf::from("/a"), PathBuf::from("/b")]),
                threshold: Some(0.3),
                ..Default::default()
            }),
            ..Default::default()
        };
        let high = Config {
            fuzzy: Some(FuzzyConfig {
                extra_dirs: Some(vec![PathBuf::from("/b"), PathBuf::from("/c")]),
                threshold: Some(0.7),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        let fuzzy = merged.fuzzy.unwrap();
        assert_eq!(fuzzy.threshold, Some(0.7));
        assert_eq!(
            fuzzy.extra_dirs.unwrap(),
            vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_none_does_not_clear() {
        let mut target = Config {
            container: Some(ContainerConfig {
                mount_prefix: Some("/host".to_string()),
                translate_drive_letters: Some(false),
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(
            target.container.unwrap().mount_prefix.as_deref(),
            Some("/host")
        );
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
