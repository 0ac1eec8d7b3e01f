//! Command implementations for the IGRA2 CLI
//!
//! Each command sets up logging, layers the reader configuration
//! (defaults, then an optional JSON file, then CLI flags), parses the input
//! file and prints its result to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::models::{Dialect, Source};
use crate::app::services::igra_parser::{IgraReader, ParseStats};
use crate::cli::args::{Args, Commands, ReaderArgs, ShowArgs, SummaryArgs};
use crate::config::{DuplicateHourPolicy, MalformedLinePolicy, ReaderConfig};
use crate::constants::LOG_TARGET;

/// Run the selected subcommand
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Show(show_args)) => show(&show_args),
        Some(Commands::Summary(summary_args)) => summary(&summary_args),
        None => Ok(()),
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &ReaderArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // Quiet output drops the timer; exactly one of the two layers is set
    let compact = args.quiet.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });
    let timed = (!args.quiet).then(|| {
        fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(timed)
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the reader configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &ReaderArgs) -> Result<ReaderConfig> {
    let mut config = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ReaderConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => ReaderConfig::default(),
    };

    apply_cli_overrides(&mut config, args);
    config.validate().context("Invalid reader configuration")?;

    debug!("Reader configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI flags on top of the loaded configuration
pub fn apply_cli_overrides(config: &mut ReaderConfig, args: &ReaderArgs) {
    if args.lenient {
        config.malformed_lines = MalformedLinePolicy::Lenient;
    }
    if args.reject_duplicates {
        config.duplicate_hours = DuplicateHourPolicy::Reject;
    }
    if let Some(missing_hour) = &args.missing_hour {
        config.missing_hour = missing_hour.clone();
    }
}

/// Dialect given on the command line, else guessed from the file name
pub fn resolve_dialect(args: &ReaderArgs) -> Result<Dialect> {
    if let Some(dialect) = args.dialect {
        return Ok(dialect);
    }
    let dialect = dialect_from_file_name(&args.file).with_context(|| {
        format!(
            "Cannot tell the dialect of {}, pass --dialect observations or --dialect derived",
            args.file.display()
        )
    })?;
    debug!("Dialect {} inferred from file name", dialect);
    Ok(dialect)
}

/// Build a reader for the command's input and parse it
fn parse_input(args: &ReaderArgs) -> Result<IgraReader> {
    let dialect = resolve_dialect(args)?;
    let config = load_configuration(args)?;
    let mut reader = IgraReader::with_config(dialect, &args.file, config);

    reader
        .parse()
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    if reader.stats().has_warnings() {
        warn!(
            "{}: {} overwritten soundings, {} orphan level lines, {} NUMLEV mismatches",
            args.file.display(),
            reader.stats().soundings_overwritten,
            reader.stats().orphan_data_lines,
            reader.stats().level_count_mismatches
        );
    }
    Ok(reader)
}

/// Print one sounding
pub fn show(args: &ShowArgs) -> Result<()> {
    setup_logging(&args.reader)?;

    let mut reader = parse_input(&args.reader)?;
    if args.source == Source::Converted {
        reader.convert().context("Failed to convert soundings")?;
    }

    let text = reader
        .render_source(&args.date, &args.hour, args.source)
        .with_context(|| format!("Cannot show sounding {} {}", args.date, args.hour))?;
    print!("{}", text);
    Ok(())
}

/// Print a summary of the file
pub fn summary(args: &SummaryArgs) -> Result<()> {
    setup_logging(&args.reader)?;

    let reader = parse_input(&args.reader)?;
    let report = SummaryReport::from_reader(&reader);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// One sounding in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundingSummary {
    pub date: String,
    pub hour: String,
    pub station: String,
    /// Launch time, absent when the hour is missing
    pub time: Option<NaiveDateTime>,
    pub levels: usize,
    pub declared_levels: Option<usize>,
}

/// File summary printed by the summary command
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub file: String,
    pub dialect: String,
    pub dates: usize,
    pub stats: ParseStats,
    pub soundings: Vec<SoundingSummary>,
}

impl SummaryReport {
    pub fn from_reader(reader: &IgraReader) -> Self {
        let soundings = reader
            .raw_data()
            .iter()
            .map(|(date, hour, sounding)| SoundingSummary {
                date: date.to_string(),
                hour: hour.to_string(),
                station: sounding.station_id().to_string(),
                time: sounding.observation_time(),
                levels: sounding.level_count(),
                declared_levels: sounding.declared_levels(),
            })
            .collect();

        Self {
            file: display_path(reader.path()),
            dialect: reader.dialect().to_string(),
            dates: reader.raw_data().len(),
            stats: reader.stats().clone(),
            soundings,
        }
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn print_summary(report: &SummaryReport) {
    println!("{}", "IGRA2 File Summary".bold());
    println!("{}", "=".repeat(18));
    println!("  File:      {}", report.file);
    println!("  Dialect:   {}", report.dialect);
    println!(
        "  Soundings: {} over {} dates",
        report.soundings.len().to_string().green(),
        report.dates.to_string().green()
    );
    println!(
        "  Lines:     {} total, {} headers, {} levels, {} skipped",
        report.stats.total_lines,
        report.stats.header_lines,
        report.stats.data_lines,
        report.stats.lines_skipped()
    );
    if report.stats.soundings_overwritten > 0 {
        println!(
            "  {}",
            format!(
                "{} soundings replaced by a later one with the same date and hour",
                report.stats.soundings_overwritten
            )
            .yellow()
        );
    }
    println!();

    println!(
        "  {:<12} {:>6} {:<12} {:>7}",
        "Date".bold(),
        "Hour".bold(),
        "Station".bold(),
        "Levels".bold()
    );
    for sounding in &report.soundings {
        let levels = match sounding.declared_levels {
            Some(declared) if declared != sounding.levels => {
                format!("{} ({})", sounding.levels, declared).yellow().to_string()
            }
            _ => sounding.levels.to_string(),
        };
        println!(
            "  {:<12} {:>6} {:<12} {:>7}",
            sounding.date, sounding.hour, sounding.station, levels
        );
    }
}

/// Dialect guessed from an IGRA2 file name (`*-data.txt` or `*-drvd.txt`)
pub fn dialect_from_file_name(path: &Path) -> Option<Dialect> {
    let name = path.file_name()?.to_str()?.to_lowercase();
    if name.ends_with("-drvd.txt") {
        Some(Dialect::Derived)
    } else if name.ends_with("-data.txt") {
        Some(Dialect::Observations)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Args;
    use chrono::NaiveDate;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reader_args(extra: &[&str]) -> ReaderArgs {
        let mut argv = vec!["igra2", "summary", "file.txt"];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            Some(Commands::Summary(summary)) => summary.reader,
            other => panic!("expected summary command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let args = reader_args(&["--lenient", "--reject-duplicates", "--missing-hour", "88"]);
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.malformed_lines, MalformedLinePolicy::Lenient);
        assert_eq!(config.duplicate_hours, DuplicateHourPolicy::Reject);
        assert_eq!(config.missing_hour, "88");
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"malformed_lines": "lenient", "missing_hour": "77"}}"#).unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = reader_args(&["--config", &path, "--missing-hour", "99"]);
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.malformed_lines, MalformedLinePolicy::Lenient);
        assert_eq!(config.duplicate_hours, DuplicateHourPolicy::Overwrite);
        assert_eq!(config.missing_hour, "99");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = reader_args(&["--missing-hour", "abc"]);
        assert!(load_configuration(&args).is_err());
    }

    #[test]
    fn test_summary_report() {
        let mut reader = IgraReader::observations("SWM00002527-data.txt");
        let content = [
            "#SWM00002527 2018 01 01 00 2315    2 ncdc6310 ncdc6310  586000   165000",
            "21 -9999 101300A    8A  113A  850    25    90    52",
            "#SWM00002527 2018 01 01 99 2315    1 ncdc6310 ncdc6310  586000   165000",
        ]
        .join("\n");
        reader.parse_str(&content).unwrap();

        let report = SummaryReport::from_reader(&reader);
        assert_eq!(report.dialect, "observations");
        assert_eq!(report.dates, 1);
        assert_eq!(
            report.soundings[0],
            SoundingSummary {
                date: "2018-01-01".to_string(),
                hour: "00".to_string(),
                station: "SWM00002527".to_string(),
                time: NaiveDate::from_ymd_opt(2018, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
                levels: 1,
                declared_levels: Some(2),
            }
        );
        assert_eq!(report.soundings[1].hour, "99_0");
        assert_eq!(report.stats.level_count_mismatches, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["soundings"][0]["time"], "2018-01-01T00:00:00");
        assert!(json["soundings"][1]["time"].is_null());
        assert_eq!(json["soundings"][1]["levels"], 0);
        assert_eq!(json["stats"]["header_lines"], 2);
    }

    #[test]
    fn test_resolve_dialect() {
        let explicit = reader_args(&["--dialect", "derived"]);
        assert_eq!(resolve_dialect(&explicit).unwrap(), Dialect::Derived);

        let mut inferred = reader_args(&[]);
        inferred.file = "SWM00002527-drvd.txt".into();
        assert_eq!(resolve_dialect(&inferred).unwrap(), Dialect::Derived);

        let unknown = reader_args(&[]);
        assert!(resolve_dialect(&unknown).is_err());
    }

    #[test]
    fn test_dialect_from_file_name() {
        assert_eq!(
            dialect_from_file_name(Path::new("data/SWM00002527-drvd.txt")),
            Some(Dialect::Derived)
        );
        assert_eq!(
            dialect_from_file_name(Path::new("SWM00002527-data.txt")),
            Some(Dialect::Observations)
        );
        assert_eq!(dialect_from_file_name(Path::new("stations.txt")), None);
        assert_eq!(dialect_from_file_name(Path::new("foo-dataset.txt")), None);
        assert_eq!(dialect_from_file_name(Path::new("foo-drvd.txt.bak")), None);
    }
}
