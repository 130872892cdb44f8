//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve an existing file against the search roots
//! - `output`: Resolve a path to write to
//! - `suggest`: List files with similar names
//! - `find`: Find model files by partial name
//! - `copy`: Copy a file between resolved locations
//! - `roots`: Show the search roots in priority order
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod copy;
pub mod find;
pub mod output;
pub mod resolve;
pub mod roots;
pub mod show_config;
pub mod suggest;

pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use find::FindCommand;
pub use output::OutputCommand;
pub use resolve::ResolveCommand;
pub use roots::RootsCommand;
pub use show_config::ShowConfigCommand;
pub use suggest::SuggestCommand;
