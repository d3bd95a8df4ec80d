//! Core types for path handling.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// A raw path after home-directory and environment-variable expansion.
///
/// The resolved path is kept exactly as expansion produced it: it is not made
/// absolute, canonicalized, or checked for existence.
///
/// # Examples
///
/// ```
/// use filelisting::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let path = ResolvedPath::new(PathBuf::from("/home/user/project"), "~/project");
/// assert_eq!(path.path(), PathBuf::from("/home/user/project"));
/// assert_eq!(path.original(), "~/project");
/// assert!(path.was_expanded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The expanded path.
    path: PathBuf,
    /// The raw argument before expansion.
    original: OsString,
}

impl ResolvedPath {
    /// Create a new resolved path.
    #[must_use]
    pub fn new(path: PathBuf, original: impl Into<OsString>) -> Self {
        Self {
            path,
            original: original.into(),
        }
    }

    /// Get a reference to the resolved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw argument this path was resolved from.
    #[must_use]
    pub fn original(&self) -> &OsStr {
        &self.original
    }

    /// Check whether expansion changed the raw string.
    #[must_use]
    pub fn was_expanded(&self) -> bool {
        self.path.as_os_str() != self.original.as_os_str()
    }

    /// Convert into the underlying resolved `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
