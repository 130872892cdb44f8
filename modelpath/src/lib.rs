#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # modelpath
//!
//! A library for resolving references to building-model files.
//!
//! Users refer to model files loosely: a bare name, a path relative to some
//! project directory, or a Windows path pasted from the host. This library
//! maps such references onto absolute paths by searching a prioritized list
//! of roots, and explains failures with the roots it searched and the files
//! it thinks were meant.
//!
//! ## Core Types
//!
//! - [`ResolverConfig`]: The immutable configuration snapshot
//! - [`PathResolver`]: Resolution, output-path synthesis and suggestions
//! - [`ResolutionRequest`] and [`ResolvedPath`]: Input and result
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use modelpath::{FileKind, PathResolver, ResolverConfig};
//!
//! let config = ResolverConfig::for_workspace("/workspace");
//! let resolver = PathResolver::new(&config);
//!
//! match resolver.resolve_read_path(FileKind::Model, "office.osm") {
//!     Ok(found) => println!("{found}"),
//!     Err(e) if e.is_not_found() => eprintln!("{e}"),
//!     Err(e) => panic!("{e}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, ResolverConfig};
pub use error::{Error, NotFoundReport, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{copy_file, CopyOptions, CopyReport};
pub use path::{
    ExtensionFilter, FileKind, PathResolver, ResolutionOrigin, ResolutionRequest, ResolvedPath,
    Suggestion,
};
