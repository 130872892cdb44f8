//! Operations built on top of path resolution.
//!
//! # Examples
//!
//! ```no_run
//! use modelpath::config::ResolverConfig;
//! use modelpath::operations::{copy_file, CopyOptions};
//!
//! let config = ResolverConfig::for_workspace("/workspace");
//! let report = copy_file(
//!     &config,
//!     &CopyOptions::new("office.osm", "baseline.osm").with_extensions([".osm"]),
//! )
//! .unwrap();
//! println!("copied {} bytes to {}", report.size_bytes, report.target.display());
//! ```

pub mod copy;

pub use copy::{copy_file, CopyOptions, CopyReport};
