//! CLI structure and argument definitions.
//!
//! This module defines the command-line interface using clap's derive
//! macros. There are no subcommands: every positional argument is a path.

use std::ffi::OsString;

use clap::Parser;

/// Command-line tool that prints every file under the given paths.
#[derive(Parser, Debug)]
#[command(name = "filelisting")]
#[command(version, about = "This command lists files under given paths.", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Files or directories to list (`~` and `$VAR` are expanded)
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,
}
