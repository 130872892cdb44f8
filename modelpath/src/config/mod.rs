//! Configuration system for modelpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `modelpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of thresholds, limits and roots
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MODELPATH_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (`modelpath.yaml`, nearest ancestor of the working dir)
//! 5. User config (`~/.modelpath/config.yaml`)
//! 6. Built-in defaults
//!
//! The merged [`Config`] is then resolved into a [`ResolverConfig`], the
//! immutable snapshot every resolution call receives.
//!
//! # Examples
//!
//! ```no_run
//! use modelpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let resolver_config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build_resolver()
//!     .unwrap();
//! println!("outputs go to {}", resolver_config.output_root.display());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use modelpath::config::{Config, ConfigBuilder, FuzzyConfig};
//!
//! let custom = Config {
//!     fuzzy: Some(FuzzyConfig {
//!         threshold: Some(0.5),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.fuzzy.unwrap().threshold, Some(0.5));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod resolved;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use resolved::{FuzzySettings, ResolverConfig};
pub use schema::{Config, ContainerConfig, FuzzyConfig, OutputFormat, PathsConfig};
pub use validator::ConfigValidator;
