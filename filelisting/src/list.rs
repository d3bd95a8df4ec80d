//! Materialized file listings.
//!
//! [`list_files`] is the entry point used by the command-line front-end. It
//! drains a [`FileSource`] into a `Vec`, keeping the order the source
//! produced and stopping at the first error.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::enumerate::FileEnumerator;
use crate::error::Result;
use crate::path::Expander;

/// A lazy stream of file paths.
pub type FileStream = Box<dyn Iterator<Item = Result<PathBuf>>>;

/// Anything that can turn raw path arguments into a stream of files.
#[cfg_attr(test, mockall::automock)]
pub trait FileSource {
    /// Start enumerating the files under `paths`, in argument order.
    fn files(&self, paths: Vec<OsString>) -> FileStream;
}

impl<E> FileSource for FileEnumerator<E>
where
    E: Expander + Clone + 'static,
{
    fn files(&self, paths: Vec<OsString>) -> FileStream {
        Box::new(self.enumerate(paths))
    }
}

/// Collect every file `source` yields for `paths`.
///
/// The source is asked exactly once, with the arguments in the given order.
///
/// # Errors
///
/// Returns the first error the source yields; files found before it are
/// discarded.
pub fn list_files_from<S, I, P>(source: &S, paths: I) -> Result<Vec<PathBuf>>
where
    S: FileSource + ?Sized,
    I: IntoIterator<Item = P>,
    P: Into<OsString>,
{
    let paths: Vec<OsString> = paths.into_iter().map(Into::into).collect();
    source.files(paths).collect()
}

/// Collect every file under `paths`, resolving `~` and environment variables.
///
/// Zero paths is valid and produces an empty list. Arguments may be any
/// `OsString`; those that are not valid UTF-8 are used without expansion.
///
/// # Errors
///
/// Returns an error if any path (after expansion) does not exist or cannot be
/// read.
///
/// # Examples
///
/// ```
/// let files = filelisting::list_files(Vec::<String>::new()).unwrap();
/// assert!(files.is_empty());
/// ```
pub fn list_files<I, P>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: Into<OsString>,
{
    list_files_from(&FileEnumerator::new(), paths)
}
