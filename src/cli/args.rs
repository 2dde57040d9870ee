//! CLI argument definitions using clap
//!
//! Commands:
//! - mystic4d derive --date <YYYY-MM-DD> --time <HH:MM> [--explain]
//! - mystic4d evaluate < record.json
//! - mystic4d generate
//! - mystic4d serve [--port <port>]
//! - mystic4d history [--clear]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_PINNED_YEAR;
use crate::facts::Shio;

/// mystic4d - deterministic 4-digit numerals from date, time and signals
#[derive(Parser, Debug)]
#[command(name = "mystic4d")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive a numeral from an explicit date and time
    Derive {
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Local time, HH:MM
        #[arg(long)]
        time: String,

        /// Year written into the record
        #[arg(long, default_value_t = DEFAULT_PINNED_YEAR)]
        year: i32,

        /// Cyclical-year label
        #[arg(long, default_value = "Ular")]
        shio: Shio,

        /// Joined signal text
        #[arg(long)]
        signals: Option<String>,

        /// Salt; overrides the configured salt
        #[arg(long)]
        salt: Option<String>,

        /// Use seed mod 10000 instead of weighted draws
        #[arg(long)]
        unweighted: bool,

        /// Include canonical form, digest, seed and weights
        #[arg(long)]
        explain: bool,
    },

    /// Derive a numeral from a record JSON object read from stdin
    Evaluate {
        /// Include canonical form, digest, seed and weights
        #[arg(long)]
        explain: bool,
    },

    /// Gather signals and derive a numeral for the current minute
    Generate,

    /// Start the HTTP server
    Serve {
        /// Port; overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print or clear the result history
    History {
        /// Remove every entry
        #[arg(long)]
        clear: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
