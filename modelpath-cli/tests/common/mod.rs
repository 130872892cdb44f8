//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] owns a temporary directory laid out like a workspace,
//! with every root pointed inside it so tests never see the host's files.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated workspace.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Workspace root inside the temporary directory
    pub workspace: PathBuf,
    /// User drop-off directory
    pub uploads: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The workspace directory exists; the other roots are created on demand.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let workspace = temp_dir.path().join("workspace");
        let uploads = temp_dir.path().join("uploads");
        fs::create_dir_all(&workspace).expect("Failed to create workspace");

        Self {
            temp_dir,
            workspace,
            uploads,
        }
    }

    /// Get a command builder with the isolated roots configured.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("modelpath").expect("Failed to find modelpath binary");
        cmd.current_dir(self.temp_dir.path())
            .env_clear()
            .env("HOME", self.temp_dir.path().join("home"))
            .env("MODELPATH_WORKSPACE_ROOT", &self.workspace)
            .env("MODELPATH_UPLOADS_DIR", &self.uploads)
            .env("MODELPATH_SESSION_HOME", self.temp_dir.path().join("session"));
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file relative to the temp dir, with parent directories.
    pub fn touch(&self, relative: &str) -> PathBuf {
        self.write(relative, "")
    }

    /// Write a file relative to the temp dir, with parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
