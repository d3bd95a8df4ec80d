//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment rooted in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the filelisting binary.
    ///
    /// The log-mode variable is cleared so the caller's environment cannot
    /// change stderr output.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("filelisting").expect("Failed to find filelisting binary");
        cmd.env_remove("FILELISTING_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parent directories) in the test environment.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, name).expect("Failed to write test file");
        path
    }

    /// Run the binary with `args` and return its stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn list(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run filelisting");

        assert!(
            output.status.success(),
            "filelisting failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Convert a path to a command-line argument.
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Render paths the way the binary prints them.
#[allow(dead_code)]
pub fn lines(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Sort output lines for order-independent comparison.
#[allow(dead_code)]
pub fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines
}
