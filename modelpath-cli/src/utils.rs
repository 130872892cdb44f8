//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: global options,
//! configuration loading, and printing reports in the selected format.

use crate::error::CliError;
use modelpath::config::{Config, OutputFormat, PathsConfig};
use modelpath::output::Report;
use modelpath::{ConfigBuilder, ExtensionFilter, ResolverConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config_file: Option<PathBuf>,

    /// Override the workspace root.
    pub workspace_root: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Configuration and output settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// Resolved configuration snapshot.
    pub config: ResolverConfig,

    /// Effective output format.
    pub format: OutputFormat,

    /// Whether non-essential output is suppressed.
    pub quiet: bool,
}

impl Session {
    /// Load hierarchical configuration.
    ///
    /// Configuration is merged from multiple sources with precedence:
    /// 1. Global options (highest priority)
    /// 2. Environment variables
    /// 3. Configuration files
    /// 4. Built-in defaults (lowest priority)
    ///
    /// The sample, output and log directories are created best-effort.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let mut builder = ConfigBuilder::new();
        if let Some(ref path) = global.config_file {
            builder = builder.with_config_file(path);
        }
        if let Some(ref root) = global.workspace_root {
            builder = builder.with_config(Config {
                paths: Some(PathsConfig {
                    workspace_root: Some(root.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }

        let config = builder.build().map_err(config_error)?;
        let format = global
            .format
            .or(config.output_format)
            .unwrap_or_default();

        let working_dir = std::env::current_dir()?;
        let config = ResolverConfig::from_config(&config, &working_dir).map_err(config_error)?;
        config.bootstrap_directories();

        Ok(Self {
            config,
            format,
            quiet: global.quiet,
        })
    }

    /// Print a report to stdout in the session's format.
    pub fn emit(&self, report: &Report<'_>) -> Result<(), CliError> {
        let text = self.format.create_formatter().format(report)?;
        println!("{text}");
        Ok(())
    }
}

fn config_error(e: modelpath::Error) -> CliError {
    match e {
        modelpath::Error::Validation { .. } | modelpath::Error::Configuration(_) => {
            CliError::Config(e.to_string())
        }
        other => CliError::Library(other),
    }
}

/// Build an extension filter from repeated `--ext` values.
///
/// Values without a leading dot get one, so `--ext osm` and `--ext .osm`
/// are equivalent.
pub fn extension_filter(extensions: &[String]) -> Result<ExtensionFilter, CliError> {
    if extensions.iter().any(|ext| matches!(ext.trim(), "" | ".")) {
        return Err(CliError::InvalidArguments(
            "--ext requires a non-empty extension".to_string(),
        ));
    }
    Ok(ExtensionFilter::new(extensions))
}

/// Print a failure in the given format.
///
/// JSON failures for library errors go to stdout so scripts can parse them;
/// everything else is written to stderr.
pub fn report_error(error: &CliError, format: OutputFormat) {
    if let (OutputFormat::Json, CliError::Library(lib_err)) = (format, error) {
        if let Ok(text) = format.create_formatter().format(&Report::Failure(lib_err)) {
            println!("{text}");
            return;
        }
    }
    eprintln!("Error: {error}");
}
