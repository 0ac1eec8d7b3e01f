//! Fixed-width column schemas for the IGRA2 file dialects
//!
//! Each dialect defines where every header field and every level field sits
//! on its line, as 1-based inclusive column ranges copied from the IGRA2
//! format descriptions, together with a raw and a converted unit label used
//! for display.
//!
//! - [`observations`] - `igra2-data-format.txt`
//! - [`derived`] - `igra2-derived-format.txt`

pub mod derived;
pub mod observations;

use std::ops::Range;

use crate::app::models::{Dialect, Source};

/// Kind of line in an IGRA2 file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Sounding header, starts with `#`
    Header,
    /// One level of the current sounding
    Data,
}

/// One field of a fixed-width line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name: &'static str,
    /// First column, 1-based
    pub start: usize,
    /// Last column, 1-based inclusive
    pub end: usize,
    pub raw_unit: &'static str,
    pub converted_unit: &'static str,
}

impl SchemaEntry {
    pub const fn new(
        name: &'static str,
        start: usize,
        end: usize,
        raw_unit: &'static str,
        converted_unit: &'static str,
    ) -> Self {
        Self {
            name,
            start,
            end,
            raw_unit,
            converted_unit,
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Zero-based, end-exclusive byte range
    pub fn byte_range(&self) -> Range<usize> {
        self.start - 1..self.end
    }

    pub fn unit(&self, source: Source) -> &'static str {
        match source {
            Source::Raw => self.raw_unit,
            Source::Converted => self.converted_unit,
        }
    }

    fn overlaps(&self, other: &SchemaEntry) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Header and level layouts of one dialect
#[derive(Debug)]
pub struct DialectSchema {
    pub dialect: Dialect,
    pub header: &'static [SchemaEntry],
    pub parameters: &'static [SchemaEntry],
}

impl DialectSchema {
    pub fn entries(&self, kind: LineKind) -> &'static [SchemaEntry] {
        match kind {
            LineKind::Header => self.header,
            LineKind::Data => self.parameters,
        }
    }

    pub fn field(&self, kind: LineKind, name: &str) -> Option<&'static SchemaEntry> {
        self.entries(kind).iter().find(|e| e.name == name)
    }

    pub fn header_field(&self, name: &str) -> Option<&'static SchemaEntry> {
        self.field(LineKind::Header, name)
    }

    pub fn parameter_field(&self, name: &str) -> Option<&'static SchemaEntry> {
        self.field(LineKind::Data, name)
    }

    pub fn header_names(&self) -> impl Iterator<Item = &'static str> {
        self.header.iter().map(|e| e.name)
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> {
        self.parameters.iter().map(|e| e.name)
    }

    /// Last column read from a line of this kind
    pub fn line_width(&self, kind: LineKind) -> usize {
        self.entries(kind).iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Unit label of a field for the given source
    pub fn unit(&self, kind: LineKind, name: &str, source: Source) -> Option<&'static str> {
        self.field(kind, name).map(|e| e.unit(source))
    }

    /// Pairs of field names whose column ranges overlap on the same line kind
    pub fn overlapping_fields(&self, kind: LineKind) -> Vec<(&'static str, &'static str)> {
        let entries = self.entries(kind);
        let mut overlaps = Vec::new();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if a.overlaps(b) {
                    overlaps.push((a.name, b.name));
                }
            }
        }
        overlaps
    }
}
