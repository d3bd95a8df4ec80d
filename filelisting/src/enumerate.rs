//! Lazy file enumeration over raw path arguments.
//!
//! [`FileEnumerator::enumerate`] produces a fresh [`Files`] iterator per call.
//! Each raw path is resolved only when the consumer reaches it, and a
//! directory is listed only as far as the consumer pulls.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::iter::FusedIterator;
use std::path::PathBuf;

use crate::error::Result;
use crate::path::{Expander, PathResolver, SystemExpander};
use crate::walk::TreeWalker;

/// Produces the files reachable from a list of raw paths.
///
/// # Examples
///
/// ```no_run
/// use filelisting::FileEnumerator;
///
/// let enumerator = FileEnumerator::new();
/// for file in enumerator.enumerate(["~/notes", "$PROJECT_ROOT/src"]) {
///     println!("{}", file?.display());
/// }
/// # Ok::<(), filelisting::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileEnumerator<E = SystemExpander> {
    resolver: PathResolver<E>,
}

impl FileEnumerator {
    /// Create an enumerator that resolves paths against the real environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Expander> FileEnumerator<E> {
    /// Create an enumerator around a specific resolver.
    #[must_use]
    pub fn with_resolver(resolver: PathResolver<E>) -> Self {
        Self { resolver }
    }

    /// The resolver applied to every raw path.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver<E> {
        &self.resolver
    }
}

impl<E: Expander + Clone> FileEnumerator<E> {
    /// Start a new lazy enumeration of `paths`.
    ///
    /// Nothing is resolved or read until the returned iterator is pulled.
    /// Arguments that are not valid UTF-8 are used verbatim, without
    /// expansion.
    pub fn enumerate<I, S>(&self, paths: I) -> Files<E>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Files {
            resolver: self.resolver.clone(),
            pending: paths.into_iter().map(Into::into).collect(),
            current: None,
            done: false,
        }
    }
}

/// Lazily enumerate the files under `paths` using the real environment.
///
/// Shorthand for `FileEnumerator::new().enumerate(paths)`.
pub fn enumerate<I, S>(paths: I) -> Files
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    FileEnumerator::new().enumerate(paths)
}

/// Files produced for a single resolved argument.
#[derive(Debug)]
enum Entries {
    File(Option<PathBuf>),
    Tree(TreeWalker),
}

impl Entries {
    fn open(path: PathBuf) -> Self {
        if fs::metadata(&path).is_ok_and(|m| m.is_file()) {
            Self::File(Some(path))
        } else {
            Self::Tree(TreeWalker::new(path))
        }
    }

    fn next(&mut self) -> Option<Result<PathBuf>> {
        match self {
            Self::File(path) => path.take().map(Ok),
            Self::Tree(walker) => walker.next(),
        }
    }
}

/// Iterator returned by [`FileEnumerator::enumerate`].
///
/// All files of one argument are yielded before any file of the next
/// argument. A failure is yielded once and ends the whole enumeration,
/// including arguments not yet reached.
#[derive(Debug)]
pub struct Files<E = SystemExpander> {
    resolver: PathResolver<E>,
    pending: VecDeque<OsString>,
    current: Option<Entries>,
    done: bool,
}

impl<E: Expander> Iterator for Files<E> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            if let Some(entries) = self.current.as_mut() {
                match entries.next() {
                    Some(Ok(path)) => return Some(Ok(path)),
                    Some(Err(e)) => {
                        log::debug!("enumeration stopped: {e}");
                        self.done = true;
                        self.current = None;
                        self.pending.clear();
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
                continue;
            }

            let Some(raw) = self.pending.pop_front() else {
                self.done = true;
                return None;
            };

            let resolved = self.resolver.resolve_os(&raw);
            log::debug!("enumerating {resolved}");
            self.current = Some(Entries::open(resolved.into_path_buf()));
        }
    }
}

impl<E: Expander> FusedIterator for Files<E> {}
