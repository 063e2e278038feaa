//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

/// Command line time logger.
///
/// Records working time as tagged intervals, one CSV file per day. The data
/// directory can be kept in a git repository as a primitive backup.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workdate to operate on, in YYYY-MM-DD (defaults to today).
    #[arg(short, long, global = true)]
    pub date: Option<NaiveDate>,

    /// Tags applied by the start and add commands.
    #[arg(short, long, global = true, num_args = 1.., default_value = "default")]
    pub tags: Vec<String>,

    /// Force git synchronization of the data directory on.
    #[arg(long, global = true, conflicts_with = "no_git")]
    pub git: bool,

    /// Force git synchronization of the data directory off.
    #[arg(long, global = true)]
    pub no_git: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a new record for the day.
    Start,

    /// Close the currently open record.
    Stop,

    /// Discard the currently open record.
    Reset,

    /// Reopen the current record with a fresh start time.
    Restart,

    /// Backfill a closed record with explicit times.
    Add {
        /// Start of the interval on the workdate.
        #[arg(long, value_name = "HH:MM[:SS]", value_parser = parse_time)]
        from: NaiveTime,

        /// End of the interval on the workdate.
        #[arg(long, value_name = "HH:MM[:SS]", value_parser = parse_time)]
        to: NaiveTime,
    },

    /// Print the per-tag time summary for the workdate.
    Stats,
}

/// Parses a wall-clock time, with or without seconds.
fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
}
