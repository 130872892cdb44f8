//! Path resolution for model and simulation files.
//!
//! This module turns loosely specified, user-supplied paths into absolute
//! paths on the current filesystem.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Input strings are normalized textually before anything touches the disk:
//! - Backslashes become forward slashes
//! - A leading `<letter>:/` is mapped under the container mount prefix
//!   (`C:\Users\a\m.osm` becomes `/mnt/c/Users/a/m.osm`)
//!
//! ## Candidate roots
//!
//! Relative inputs are searched under a fixed, prioritized list of roots:
//! uploads, session home, sample models, sample files, outputs, workspace.
//! Only roots that exist at the moment of the call take part, and the list
//! is rebuilt on every call.
//!
//! ## Suggestions
//!
//! A failed must-exist lookup can carry near-miss file names ranked by a
//! longest-common-subsequence ratio.
//!
//! # Examples
//!
//! ```no_run
//! use modelpath::config::ResolverConfig;
//! use modelpath::path::{ExtensionFilter, PathResolver, ResolutionRequest};
//!
//! let config = ResolverConfig::for_workspace("/workspace");
//! let resolver = PathResolver::new(&config);
//!
//! let request = ResolutionRequest::new(r"C:\models\office.osm")
//!     .with_extensions([".osm"])
//!     .with_description("OSM file");
//! match resolver.resolve(&request) {
//!     Ok(found) => println!("{found}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//!
//! let output = resolver
//!     .resolve_write_path("results/run.osm", None, &ExtensionFilter::new([".osm"]))
//!     .unwrap();
//! assert!(output.path().ends_with("run.osm"));
//! ```

pub mod discovery;
pub mod extension;
pub mod fuzzy;
pub mod normalize;
pub mod request;
pub mod resolver;
pub mod roots;
mod types;

// Re-export key types
pub use extension::ExtensionFilter;
pub use fuzzy::{similarity, FuzzyMatcher, SearchBudget, Suggestion};
pub use request::{FileKind, ResolutionRequest};
pub use resolver::PathResolver;
pub use roots::{CandidateRoot, RootLabel};
pub use types::{ResolutionOrigin, ResolvedPath};
