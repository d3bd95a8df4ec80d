//! Build script for filelisting-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("filelisting")
        .version(env!("CARGO_PKG_VERSION"))
        .about("This command lists files under given paths.")
        .long_about(
            "Print every file under the given paths, one per line. Directories are \
             listed recursively; a leading ~ and $VAR / ${VAR} references are expanded.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::ffi::OsString))
                .help("Files or directories to list (`~` and `$VAR` are expanded)")
                .num_args(0..),
        )
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("filelisting.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
