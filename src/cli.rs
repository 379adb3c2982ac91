//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Event-filtering gate for analytics event streams
#[derive(Parser)]
#[command(
    name = "event-gate",
    version,
    about = "Event-filtering gate for analytics event streams",
    long_about = "Reads newline-delimited JSON events from stdin and forwards each one to \
                  stdout or suppresses it, based on declarative filter conditions, a \
                  drop-by-name list, and a missing-property policy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Filter events from stdin to stdout (alias: process)
    #[command(alias = "process")]
    Run {
        /// Path to the filter conditions file (overrides filters_path from config)
        #[arg(long, short = 'f')]
        filters: Option<PathBuf>,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration and filter conditions
    Check {
        /// Path to the filter conditions file (overrides filters_path from config)
        #[arg(long, short = 'f')]
        filters: Option<PathBuf>,
    },
    /// Display version information
    Version,
}
