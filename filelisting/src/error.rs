//! Error types for the filelisting library.
//!
//! Path resolution never fails; every error here comes from touching the
//! filesystem while enumerating files. Errors are built with `thiserror`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a filelisting error.
///
/// # Examples
///
/// ```
/// use filelisting::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/tmp/a.txt"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the filelisting library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// Any other failure while listing or inspecting a path.
    #[error("cannot read {}: {source}", path.display())]
    ReadDir {
        /// The path being read when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Build an error for an I/O failure on `path`, classified by its kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use filelisting::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::ErrorKind::NotFound.into());
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::ReadDir {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::ReadDir { path, .. } => path,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use filelisting::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use filelisting::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
