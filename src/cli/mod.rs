//! CLI module for mystic4d
//!
//! Provides command-line interface for:
//! - derive: Numeral for an explicit date and time
//! - evaluate: Numeral for a record read from stdin
//! - generate: One generation round for the current minute
//! - serve: HTTP server
//! - history: Print or clear the result history

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{derive, evaluate, generate, history, run, run_command, serve, EvaluateRequest};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
