//! Common test utilities for integration tests.
//!
//! This module provides a throwaway directory layout with every search root
//! placed inside a temporary directory, so tests never touch fixed system
//! paths.

use std::fs;
use std::path::{Path, PathBuf};

use modelpath::ResolverConfig;
use tempfile::TempDir;

/// A temporary tree holding all search roots.
pub struct Sandbox {
    /// Kept alive for the sandbox's lifetime.
    pub temp: TempDir,
    /// Configuration pointing into `temp`.
    pub config: ResolverConfig,
}

impl Sandbox {
    /// Creates a sandbox with no root directories created yet.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let config = ResolverConfig::for_workspace(temp.path().join("workspace"))
            .with_uploads_dir(temp.path().join("uploads"))
            .with_session_home(temp.path().join("home"));
        Self { temp, config }
    }

    /// The sandbox directory.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Creates an empty file (and its parents), returning its path.
    pub fn touch(&self, path: impl AsRef<Path>) -> PathBuf {
        self.write(path, b"")
    }

    /// Creates a file with contents (and its parents), returning its path.
    pub fn write(&self, path: impl AsRef<Path>, contents: &[u8]) -> PathBuf {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
