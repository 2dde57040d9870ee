//! mystic4d CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`; on failure the error
//! goes to stderr and the process exits non-zero.

use mystic4d::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
