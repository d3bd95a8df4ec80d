//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for file trees and a guard for
//! temporarily overriding environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree populated with files.
///
/// The tree is removed when the fixture is dropped.
pub struct TreeFixture {
    temp_dir: TempDir,
    files: Vec<PathBuf>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
            files: Vec::new(),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the tree as a raw path argument.
    pub fn root_arg(&self) -> String {
        self.arg(self.root())
    }

    /// Convert a path to the string form the engine accepts.
    pub fn arg(&self, path: &Path) -> String {
        path.to_str().expect("temp paths are UTF-8").to_string()
    }

    /// Create a file at `relative` (parents included) and remember it.
    pub fn file(mut self, relative: &str) -> Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, relative.as_bytes()).expect("Failed to write file");
        self.files.push(path);
        self
    }

    /// Create an empty directory at `relative`.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root().join(relative)).expect("Failed to create dir");
        self
    }

    /// Every file created so far, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = self.files.clone();
        files.sort();
        files
    }

    /// Files created so far that live under `relative`, sorted.
    pub fn files_under(&self, relative: &str) -> Vec<PathBuf> {
        let base = self.root().join(relative);
        self.files()
            .into_iter()
            .filter(|p| p.starts_with(&base))
            .collect()
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// Sort a listing so it can be compared against a fixture.
#[allow(dead_code)]
pub fn sorted(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.sort();
    files
}
