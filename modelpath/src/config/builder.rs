//! Layered configuration builder.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::resolved::ResolverConfig;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from files, environment, and programmatic overrides.
///
/// # Examples
///
/// ```
/// use modelpath::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Json),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory from which project configuration is discovered and
    /// relative roots are anchored. Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// An explicit configuration file, layered above discovered ones.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `MODELPATH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// value is malformed, or the merged configuration is invalid.
    pub fn build(&self) -> Result<Config> {
        let working_dir = self.working_dir()?;

        let mut config = if self.skip_files {
            match self.config_file {
                Some(ref path) => ConfigLoader::load_file(path)?,
                None => Config::default(),
            }
        } else {
            let sources = ConfigLoader::load_all(&working_dir, self.config_file.as_deref())?;
            for source in &sources {
                log::debug!("Loaded configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build, then resolve defaults into a [`ResolverConfig`].
    ///
    /// # Errors
    ///
    /// Returns any error from [`build`](Self::build) or from resolving the
    /// configured roots.
    pub fn build_resolver(&self) -> Result<ResolverConfig> {
        let config = self.build()?;
        ResolverConfig::from_config(&config, &self.working_dir()?)
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match self.working_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => env::current_dir().map_err(|e| Error::InvalidPath {
                path: PathBuf::from("."),
                reason: format!("Cannot get current directory: {e}"),
            }),
        }
    }
}
