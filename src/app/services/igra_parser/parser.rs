//! IGRA2 reader orchestration
//!
//! Binds a dialect to a file path, reads the whole file on `parse`, and
//! keeps both stores so that conversion and display can run afterwards.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::accumulator::SoundingAccumulator;
use super::line::split_lines;
use super::stats::ParseStats;
use crate::app::models::{ConvertedStore, Dialect, RawStore, Source};
use crate::app::services::converter::Converter;
use crate::app::services::display;
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Reader for one IGRA2 file
///
/// Typical use is parse, then convert, then query either store:
/// - [`parse`](Self::parse) fills the raw store from the file
/// - [`convert`](Self::convert) rebuilds the converted store from the raw one
/// - [`render`](Self::render) formats a single sounding from either store
#[derive(Debug)]
pub struct IgraReader {
    dialect: Dialect,
    path: PathBuf,
    config: ReaderConfig,
    raw_data: RawStore,
    converted_data: ConvertedStore,
    stats: ParseStats,
}

impl IgraReader {
    /// Create a reader with the default configuration
    pub fn new(dialect: Dialect, path: impl Into<PathBuf>) -> Self {
        Self::with_config(dialect, path, ReaderConfig::default())
    }

    pub fn with_config(dialect: Dialect, path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self {
            dialect,
            path: path.into(),
            config,
            raw_data: RawStore::new(),
            converted_data: ConvertedStore::new(),
            stats: ParseStats::new(),
        }
    }

    /// Reader for an observation file (`*-data.txt`)
    pub fn observations(path: impl Into<PathBuf>) -> Self {
        Self::new(Dialect::Observations, path)
    }

    /// Reader for a derived-parameter file (`*-drvd.txt`)
    pub fn derived(path: impl Into<PathBuf>) -> Self {
        Self::new(Dialect::Derived, path)
    }

    /// Read the file and populate the raw store
    ///
    /// A missing file fails before any read and leaves both stores as they
    /// were. On success the raw store is replaced and the converted store
    /// is cleared.
    pub fn parse(&mut self) -> Result<&ParseStats> {
        self.config.validate()?;

        if !self.path.exists() {
            return Err(Error::file_not_found(self.path.display().to_string()));
        }

        info!(
            "Parsing IGRA2 {} file: {}",
            self.dialect,
            self.path.display()
        );

        let content = std::fs::read(&self.path).map_err(|e| {
            Error::io(format!("Failed to read file {}", self.path.display()), e)
        })?;

        self.parse_bytes(&content)
    }

    /// Scan already-loaded text instead of reading the bound path
    pub fn parse_str(&mut self, content: &str) -> Result<&ParseStats> {
        self.config.validate()?;
        self.parse_bytes(content.as_bytes())
    }

    fn parse_bytes(&mut self, content: &[u8]) -> Result<&ParseStats> {
        let mut accumulator = SoundingAccumulator::new(self.dialect.schema(), &self.config);
        for (line_number, line) in split_lines(content) {
            accumulator.push_line(line_number, line)?;
        }
        let (store, stats) = accumulator.finish()?;

        info!(
            "Parsed {} soundings over {} dates from {} lines",
            store.sounding_count(),
            store.len(),
            stats.total_lines
        );
        if stats.orphan_data_lines > 0 {
            warn!(
                "Skipped {} level lines that preceded the first header",
                stats.orphan_data_lines
            );
        }

        self.raw_data = store;
        self.converted_data = ConvertedStore::new();
        self.stats = stats;
        Ok(&self.stats)
    }

    /// Convert the raw store into the converted store
    ///
    /// The converted store is rebuilt from scratch, so repeated calls give
    /// the same result. An empty raw store converts to an empty store.
    pub fn convert(&mut self) -> Result<&ConvertedStore> {
        let converted = Converter::new(self.dialect).convert(&self.raw_data)?;
        self.converted_data = converted;
        Ok(&self.converted_data)
    }

    /// Render one sounding; `source` must be exactly "raw" or "converted"
    pub fn render(&self, date: &str, hour: &str, source: &str) -> Result<String> {
        let source: Source = source.parse()?;
        self.render_source(date, hour, source)
    }

    pub fn render_source(&self, date: &str, hour: &str, source: Source) -> Result<String> {
        let schema = self.dialect.schema();
        match source {
            Source::Raw => {
                let sounding = self.raw_data.lookup(source.name(), date, hour)?;
                Ok(display::render_raw(schema, sounding))
            }
            Source::Converted => {
                let sounding = self.converted_data.lookup(source.name(), date, hour)?;
                Ok(display::render_converted(schema, sounding))
            }
        }
    }

    pub fn raw_data(&self) -> &RawStore {
        &self.raw_data
    }

    pub fn converted_data(&self) -> &ConvertedStore {
        &self.converted_data
    }

    /// Statistics of the last successful parse
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}
