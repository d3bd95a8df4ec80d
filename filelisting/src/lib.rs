#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # filelisting
//!
//! A library for listing every file reachable from a set of user-supplied
//! paths.
//!
//! Each raw path is first resolved (a leading `~` is expanded, then `$VAR` /
//! `${VAR}` references are substituted). A resolved path naming a file
//! yields that file; a resolved path naming a directory yields every file in
//! its tree. Enumeration is lazy: nothing is resolved or read until the
//! consumer pulls the next item.
//!
//! ## Core Types
//!
//! - [`PathResolver`] and [`Expander`]: raw path resolution
//! - [`FileEnumerator`] and [`Files`]: lazy enumeration
//! - [`TreeWalker`]: the underlying directory walk
//! - [`list_files`] and [`FileSource`]: materialized listings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use filelisting::list_files;
//!
//! for file in list_files(["~/Documents", "$HOME/.config"])? {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), filelisting::Error>(())
//! ```

pub mod enumerate;
pub mod error;
pub mod list;
pub mod logging;
pub mod path;
pub mod walk;

// Re-export key types at crate root for convenience
pub use enumerate::{enumerate, FileEnumerator, Files};
pub use error::{Error, Result};
pub use list::{list_files, list_files_from, FileSource, FileStream};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Expander, PathResolver, ResolvedPath, SystemExpander};
pub use walk::TreeWalker;
