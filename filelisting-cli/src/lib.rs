//! Library exports for filelisting-cli.
//!
//! This module exports the CLI structure and the `run` entry point so the
//! binary stays a thin wrapper and the listing flow can be tested in-process.

pub mod cli;
pub mod error;
pub mod output;

use std::ffi::OsString;
use std::io::Write;

use filelisting::{list_files_from, FileSource};

pub use cli::Cli;
pub use error::CliError;

/// List every file under `paths` from `source` and write them to `out`.
///
/// The listing is fully collected before anything is written, so a failure
/// on any path produces no partial output.
///
/// # Errors
///
/// Returns `CliError::Library` if a path cannot be listed and `CliError::Io`
/// if writing to `out` fails.
pub fn run<S, W>(paths: Vec<OsString>, source: &S, out: &mut W) -> Result<(), CliError>
where
    S: FileSource + ?Sized,
    W: Write + ?Sized,
{
    let files = list_files_from(source, paths)?;
    output::write_paths(out, &files)?;
    Ok(())
}
