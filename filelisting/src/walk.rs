//! Lazy directory-tree walking.
//!
//! [`TreeWalker`] is a pull-based iterator over every non-directory entry
//! below a root. Directories are listed only when the consumer asks for more
//! items, and at most one directory handle is open at any time.

use std::collections::VecDeque;
use std::fs::{self, DirEntry, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Iterator over the files below a directory.
///
/// Entries are reported as `root.join(relative)`, so a relative root yields
/// relative paths. Symbolic links to directories are not descended into;
/// links to anything else (including dangling links) are yielded like files.
///
/// Traversal order is unspecified: entries come out in `read_dir` order and
/// subdirectories are visited after the directory containing them has been
/// fully listed.
///
/// The first error ends the walk. It is yielded once, and every later call to
/// `next` returns `None`.
///
/// # Examples
///
/// ```no_run
/// use filelisting::walk::TreeWalker;
///
/// for file in TreeWalker::new("/etc") {
///     println!("{}", file.unwrap().display());
/// }
/// ```
#[derive(Debug)]
pub struct TreeWalker {
    /// Directories still waiting to be listed.
    pending: VecDeque<PathBuf>,
    /// The directory currently being listed, with its open cursor.
    current: Option<(PathBuf, ReadDir)>,
    done: bool,
}

impl TreeWalker {
    /// Create a walker rooted at `root`.
    ///
    /// Nothing is read until the first call to `next`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            pending: VecDeque::from([root.into()]),
            current: None,
            done: false,
        }
    }

    fn fail(&mut self, error: Error) -> Option<Result<PathBuf>> {
        self.done = true;
        self.pending.clear();
        self.current = None;
        Some(Err(error))
    }
}

/// What to do with a single directory entry.
enum Visit {
    Yield(PathBuf),
    Descend(PathBuf),
    Skip,
}

fn classify(entry: &DirEntry) -> Result<Visit> {
    let path = entry.path();
    let file_type = entry
        .file_type()
        .map_err(|e| Error::from_io(&path, e))?;

    if file_type.is_dir() {
        return Ok(Visit::Descend(path));
    }

    if file_type.is_symlink() && points_to_dir(&path) {
        log::debug!("not following directory link {}", path.display());
        return Ok(Visit::Skip);
    }

    Ok(Visit::Yield(path))
}

fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

impl Iterator for TreeWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some((dir, entries)) = self.current.as_mut() {
                match entries.next() {
                    Some(Ok(entry)) => match classify(&entry) {
                        Ok(Visit::Yield(path)) => return Some(Ok(path)),
                        Ok(Visit::Descend(path)) => self.pending.push_back(path),
                        Ok(Visit::Skip) => {}
                        Err(e) => return self.fail(e),
                    },
                    Some(Err(e)) => {
                        let error = Error::from_io(dir, e);
                        return self.fail(error);
                    }
                    None => self.current = None,
                }
                continue;
            }

            let Some(dir) = self.pending.pop_front() else {
                self.done = true;
                return None;
            };

            log::debug!("listing {}", dir.display());
            match fs::read_dir(&dir) {
                Ok(entries) => self.current = Some((dir, entries)),
                Err(e) => {
                    let error = Error::from_io(&dir, e);
                    return self.fail(error);
                }
            }
        }
    }
}

impl std::iter::FusedIterator for TreeWalker {}
