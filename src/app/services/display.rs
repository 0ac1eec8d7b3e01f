//! Text rendering of a single sounding
//!
//! Produces the station banner, the header fields with their units, the
//! parameter unit list and a right-aligned table with one row per level.
//! Raw values are printed exactly as sliced; converted floats use two
//! decimals.

use std::fmt;

use crate::app::models::{ConvertedSounding, RawSounding, Source};
use crate::app::services::schema::{DialectSchema, LineKind};
use crate::constants::display::{
    COLUMN_PADDING, FLOAT_PRECISION, HIDDEN_HEADER_FIELD, LABEL_WIDTH, RULE_WIDTH,
};

/// A sounding flattened to text, ready to be printed
#[derive(Debug, Clone)]
pub struct SoundingTable {
    schema: &'static DialectSchema,
    source: Source,
    header: Vec<(&'static str, String)>,
    columns: Vec<(&'static str, Vec<String>)>,
}

impl SoundingTable {
    pub fn from_raw(schema: &'static DialectSchema, sounding: &RawSounding) -> Self {
        Self {
            schema,
            source: Source::Raw,
            header: sounding
                .header
                .iter()
                .map(|(name, value)| (name, value.clone()))
                .collect(),
            columns: sounding
                .parameters
                .iter()
                .map(|(name, values)| (name, values.clone()))
                .collect(),
        }
    }

    pub fn from_converted(schema: &'static DialectSchema, sounding: &ConvertedSounding) -> Self {
        let columns = sounding
            .parameters
            .iter()
            .map(|(name, values)| {
                let cells: Vec<String> = (0..values.len())
                    .filter_map(|i| values.format_at(i, FLOAT_PRECISION))
                    .collect();
                (name, cells)
            })
            .collect();

        Self {
            schema,
            source: Source::Converted,
            header: sounding
                .header
                .iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
            columns,
        }
    }

    fn header_value(&self, name: &str) -> &str {
        self.header
            .iter()
            .find(|(n, _)| *n == name)
            .map_or("", |(_, v)| v.as_str())
    }

    fn unit(&self, kind: LineKind, name: &str) -> &'static str {
        self.schema.unit(kind, name, self.source).unwrap_or("-")
    }

    fn level_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, cells)| cells.len())
    }

    /// Total width of the parameter table rules
    fn table_width(&self) -> usize {
        let columns: usize = self
            .columns
            .iter()
            .map(|(name, _)| name.len() + COLUMN_PADDING)
            .sum();
        columns + COLUMN_PADDING
    }
}

impl fmt::Display for SoundingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Station: {}", self.header_value("ID"))?;
        writeln!(
            f,
            "Date: {}-{}-{}",
            self.header_value("YEAR"),
            self.header_value("MONTH"),
            self.header_value("DAY")
        )?;
        writeln!(f, "Hour: {}", self.header_value("HOUR"))?;
        writeln!(f, "Data type: {}", self.source)?;
        writeln!(f)?;

        writeln!(f, "Header information:")?;
        for (name, value) in &self.header {
            if *name == HIDDEN_HEADER_FIELD {
                continue;
            }
            let label = format!("{} [{}]", name, self.unit(LineKind::Header, name));
            writeln!(f, "{:>width$}: {}", label, value, width = LABEL_WIDTH)?;
        }
        writeln!(f)?;

        writeln!(f, "Parameters and units:")?;
        for entry in self.schema.parameters {
            writeln!(
                f,
                "{:>width$}: [{}]",
                entry.name,
                entry.unit(self.source),
                width = LABEL_WIDTH
            )?;
        }
        writeln!(f)?;

        for (name, _) in &self.columns {
            write!(f, "{:>width$}", name, width = name.len() + COLUMN_PADDING)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(self.table_width()))?;

        for level in 0..self.level_count() {
            for (name, cells) in &self.columns {
                let cell = cells.get(level).map_or("", String::as_str);
                write!(f, "{:>width$}", cell, width = name.len() + COLUMN_PADDING)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "_".repeat(self.table_width()))
    }
}

/// Render a raw sounding
pub fn render_raw(schema: &'static DialectSchema, sounding: &RawSounding) -> String {
    SoundingTable::from_raw(schema, sounding).to_string()
}

/// Render a converted sounding
pub fn render_converted(schema: &'static DialectSchema, sounding: &ConvertedSounding) -> String {
    SoundingTable::from_converted(schema, sounding).to_string()
}
