//! Parsing statistics for IGRA2 files
//!
//! Counters collected while scanning a file, reported after a parse and
//! serialized by the CLI summary.

/// Line and sounding counters for one parse
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the input
    pub total_lines: usize,

    /// Lines starting with the header marker
    pub header_lines: usize,

    /// Level lines appended to a sounding
    pub data_lines: usize,

    /// Whitespace-only lines ignored
    pub blank_lines_skipped: usize,

    /// Level lines found before any header, ignored
    pub orphan_data_lines: usize,

    /// Soundings flushed into the store, including ones later replaced
    pub soundings_stored: usize,

    /// Soundings that replaced an earlier one with the same date and hour
    pub soundings_overwritten: usize,

    /// Soundings whose NUMLEV differs from the number of level lines read
    pub level_count_mismatches: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that did not contribute to any sounding
    pub fn lines_skipped(&self) -> usize {
        self.blank_lines_skipped + self.orphan_data_lines
    }

    /// Soundings still present in the store
    pub fn soundings_kept(&self) -> usize {
        self.soundings_stored
            .saturating_sub(self.soundings_overwritten)
    }

    /// Check whether anything unusual happened during the parse
    pub fn has_warnings(&self) -> bool {
        self.orphan_data_lines > 0
            || self.soundings_overwritten > 0
            || self.level_count_mismatches > 0
    }
}
