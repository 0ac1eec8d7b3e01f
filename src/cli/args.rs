//! Command-line argument definitions for the IGRA2 processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{Dialect, Source};
use crate::constants::DEFAULT_LOG_LEVEL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the IGRA2 sounding reader
///
/// Reads IGRA2 observation or derived-parameter files, converts the scaled
/// integer encoding to SI units and prints individual soundings or a file
/// summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "igra2",
    version,
    about = "Read and convert IGRA2 radiosonde sounding files",
    long_about = "Parses fixed-width IGRA2 sounding files (observations or derived parameters), \
                  groups soundings by date and hour, converts raw values to SI units with NaN \
                  for missing data, and prints single soundings or a per-file summary."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print one sounding from the raw or converted store
    Show(ShowArgs),
    /// List the dates, hours and level counts of a file
    Summary(SummaryArgs),
}

/// Input file and reader options shared by all commands
#[derive(Debug, Clone, clap::Args)]
pub struct ReaderArgs {
    /// IGRA2 file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// File dialect: observations (obs) or derived (drvd)
    ///
    /// When omitted, the dialect is taken from an IGRA2 file name ending in
    /// `-data.txt` or `-drvd.txt`.
    #[arg(short = 'd', long = "dialect", value_name = "DIALECT")]
    pub dialect: Option<Dialect>,

    /// Read lines shorter than the column layout as truncated values
    ///
    /// By default such a line stops the parse with an error.
    #[arg(long = "lenient", help = "Accept lines shorter than the column layout")]
    pub lenient: bool,

    /// Fail when two soundings share a date and a non-missing hour
    ///
    /// By default the later sounding replaces the earlier one.
    #[arg(
        long = "reject-duplicates",
        help = "Fail on duplicate date/hour soundings instead of keeping the later one"
    )]
    pub reject_duplicates: bool,

    /// Hour value that marks a sounding without a known hour
    #[arg(long = "missing-hour", value_name = "HH")]
    pub missing_hour: Option<String>,

    /// Path to a JSON reader configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only show warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ReaderArgs {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub reader: ReaderArgs,

    /// Date key, `YEAR-MONTH-DAY` as written in the file
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Hour key, such as `00`, `12` or `99_0` for a sounding without hour
    #[arg(long = "hour", value_name = "HOUR")]
    pub hour: String,

    /// Store to print from: raw or converted
    #[arg(long = "source", value_name = "SOURCE", default_value = "converted")]
    pub source: Source,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub reader: ReaderArgs,

    /// Print the summary as JSON
    #[arg(long = "json", help = "Print the summary as JSON")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_command() {
        let args = Args::try_parse_from([
            "igra2",
            "show",
            "SWM00002527-drvd.txt",
            "--dialect",
            "derived",
            "--date",
            "2020-05-26",
            "--hour",
            "00",
            "--source",
            "raw",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Show(show)) => {
                assert_eq!(show.reader.file, PathBuf::from("SWM00002527-drvd.txt"));
                assert_eq!(show.reader.dialect, Some(Dialect::Derived));
                assert_eq!(show.date, "2020-05-26");
                assert_eq!(show.hour, "00");
                assert_eq!(show.source, Source::Raw);
            }
            other => panic!("expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_show_defaults() {
        let args = Args::try_parse_from([
            "igra2", "show", "file.txt", "--date", "2018-01-01", "--hour", "99_0",
        ])
        .unwrap();

        let Some(Commands::Show(show)) = args.command else {
            panic!("expected show command");
        };
        assert_eq!(show.reader.dialect, None);
        assert_eq!(show.source, Source::Converted);
        assert!(!show.reader.lenient);
        assert!(!show.reader.reject_duplicates);
        assert!(show.reader.config_file.is_none());
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        let result = Args::try_parse_from([
            "igra2", "show", "file.txt", "--date", "2018-01-01", "--hour", "00", "--source",
            "fail",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dialect_alias() {
        let args =
            Args::try_parse_from(["igra2", "summary", "file.txt", "-d", "drvd", "--json"]).unwrap();

        let Some(Commands::Summary(summary)) = args.command else {
            panic!("expected summary command");
        };
        assert_eq!(summary.reader.dialect, Some(Dialect::Derived));
        assert!(summary.json);
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["igra2", "summary", "file.txt"]).unwrap();
        let Some(Commands::Summary(mut summary)) = args.command else {
            panic!("expected summary command");
        };

        assert_eq!(summary.reader.get_log_level(), "info");
        summary.reader.verbose = 1;
        assert_eq!(summary.reader.get_log_level(), "debug");
        summary.reader.verbose = 3;
        assert_eq!(summary.reader.get_log_level(), "trace");
        summary.reader.verbose = 0;
        summary.reader.quiet = true;
        assert_eq!(summary.reader.get_log_level(), "warn");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["igra2", "summary", "file.txt", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["igra2"]).unwrap();
        assert!(args.command.is_none());
    }
}
