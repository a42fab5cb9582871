//! Command-line interface definition using clap
//!
//! Provides structured argument parsing for the demo binary with automatic
//! help generation.

use crate::level::Level;
use clap::Parser;

/// Minimal process-wide line logger demo
#[derive(Parser, Debug)]
#[command(name = "linelog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base name of the log file; an empty value logs to the console only
    #[arg(long, value_name = "PATH", default_value = "app")]
    pub file: String,

    /// Don't echo records to standard output
    #[arg(long)]
    pub no_console: bool,

    /// Enable verbose diagnostic output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads emitting records
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub threads: usize,

    /// Severity the workers tag their records with
    #[arg(long, value_name = "LEVEL", default_value = "INFO")]
    pub level: Level,
}

// =============================================================================
// Tests
// =============================================================================
