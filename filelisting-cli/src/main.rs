//! Main entry point for the filelisting CLI.
//!
//! Prints every file under the paths given on the command line, one per
//! line. `~` and environment variables in the paths are expanded first.

use std::io::{self, BufWriter};

use clap::Parser;
use filelisting::FileEnumerator;
use filelisting_cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    let logger = filelisting::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: {e}");
    }

    let result = {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        filelisting_cli::run(cli.paths, &FileEnumerator::new(), &mut out)
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_broken_pipe() => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
