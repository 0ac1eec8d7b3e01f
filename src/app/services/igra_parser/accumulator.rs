//! Sounding accumulator
//!
//! Lines are fed one at a time. A header line closes the sounding being
//! built (if any) and opens a new one; data lines append a level to the open
//! sounding. Lines before the first header have nowhere to go and are
//! counted and dropped.

use std::mem;
use tracing::{debug, warn};

use super::line::{classify, is_blank, slice_fields};
use super::stats::ParseStats;
use super::store::flush_sounding;
use crate::app::models::{RawSounding, RawStore};
use crate::app::services::schema::{DialectSchema, LineKind};
use crate::config::ReaderConfig;
use crate::Result;

#[derive(Debug)]
enum AccumulatorState {
    AwaitingFirstHeader,
    Accumulating(RawSounding),
}

/// Builds a raw store from a stream of lines
#[derive(Debug)]
pub struct SoundingAccumulator<'a> {
    schema: &'static DialectSchema,
    config: &'a ReaderConfig,
    state: AccumulatorState,
    store: RawStore,
    stats: ParseStats,
}

impl<'a> SoundingAccumulator<'a> {
    pub fn new(schema: &'static DialectSchema, config: &'a ReaderConfig) -> Self {
        Self {
            schema,
            config,
            state: AccumulatorState::AwaitingFirstHeader,
            store: RawStore::new(),
            stats: ParseStats::new(),
        }
    }

    /// Feed one line, without its terminator
    pub fn push_line(&mut self, line_number: usize, line: &[u8]) -> Result<()> {
        self.stats.total_lines += 1;

        if self.config.skip_blank_lines && is_blank(line) {
            self.stats.blank_lines_skipped += 1;
            return Ok(());
        }

        match classify(line) {
            LineKind::Header => self.start_sounding(line_number, line),
            LineKind::Data => self.add_level(line_number, line),
        }
    }

    fn start_sounding(&mut self, line_number: usize, line: &[u8]) -> Result<()> {
        let header = slice_fields(
            line,
            self.schema.header,
            line_number,
            self.config.malformed_lines,
        )?;
        self.stats.header_lines += 1;

        let next = RawSounding::new(header, self.schema.parameter_names());
        let previous = mem::replace(&mut self.state, AccumulatorState::Accumulating(next));
        if let AccumulatorState::Accumulating(finished) = previous {
            flush_sounding(&mut self.store, finished, self.config, &mut self.stats)?;
        }
        Ok(())
    }

    fn add_level(&mut self, line_number: usize, line: &[u8]) -> Result<()> {
        match &mut self.state {
            AccumulatorState::AwaitingFirstHeader => {
                if self.stats.orphan_data_lines == 0 {
                    warn!(
                        "Line {} holds level data before any header line, ignoring it",
                        line_number
                    );
                } else {
                    debug!("Ignoring level line {} before first header", line_number);
                }
                self.stats.orphan_data_lines += 1;
            }
            AccumulatorState::Accumulating(sounding) => {
                let level = slice_fields(
                    line,
                    self.schema.parameters,
                    line_number,
                    self.config.malformed_lines,
                )?;
                sounding.push_level(level);
                self.stats.data_lines += 1;
            }
        }
        Ok(())
    }

    /// Flush the open sounding and hand back the store with its statistics
    pub fn finish(mut self) -> Result<(RawStore, ParseStats)> {
        let last = mem::replace(&mut self.state, AccumulatorState::AwaitingFirstHeader);
        if let AccumulatorState::Accumulating(sounding) = last {
            flush_sounding(&mut self.store, sounding, self.config, &mut self.stats)?;
        }
        Ok((self.store, self.stats))
    }
}
