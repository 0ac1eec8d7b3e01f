//! Core data models for IGRA2 soundings
//!
//! This module defines the two-stage data model: raw soundings holding the
//! untouched fixed-width slices, and converted soundings holding typed values
//! in SI units. Both are grouped in a [`KeyedStore`] by date and hour.

pub mod store;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

use crate::app::services::schema::{self, DialectSchema};
use crate::{Error, Result};

pub use store::{DateBucket, KeyedStore};

/// Store of raw soundings keyed by date then hour
pub type RawStore = KeyedStore<RawSounding>;

/// Store of converted soundings with the same keys as the raw store
pub type ConvertedStore = KeyedStore<ConvertedSounding>;

/// IGRA2 file dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Per-level observations with quality flags (`igra2-data-format`)
    Observations,
    /// Per-sounding indices and per-level derived quantities (`igra2-derived-format`)
    Derived,
}

impl Dialect {
    /// All supported dialects
    pub const ALL: [Dialect; 2] = [Dialect::Observations, Dialect::Derived];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Observations => "observations",
            Dialect::Derived => "derived",
        }
    }

    /// Column schema for this dialect
    pub fn schema(&self) -> &'static DialectSchema {
        match self {
            Dialect::Observations => &schema::observations::SCHEMA,
            Dialect::Derived => &schema::derived::SCHEMA,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "observations" | "observation" | "obs" | "data" => Ok(Dialect::Observations),
            "derived" | "drvd" => Ok(Dialect::Derived),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

/// Which store a lookup or rendering reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Raw,
    Converted,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Raw => "raw",
            Source::Converted => "converted",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Source {
    type Err = Error;

    /// Only the exact literals "raw" and "converted" are accepted
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw" => Ok(Source::Raw),
            "converted" => Ok(Source::Converted),
            _ => Err(Error::invalid_source(s)),
        }
    }
}

/// Field-name keyed map that keeps schema (insertion) order
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> FieldMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value, replacing and returning any previous value for the field
    pub fn insert(&mut self, name: &'static str, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(&'static str, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<V> IntoIterator for FieldMap<V> {
    type Item = (&'static str, V);
    type IntoIter = std::vec::IntoIter<(&'static str, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One sounding exactly as sliced from the file
///
/// Header values keep their surrounding whitespace. Each parameter column
/// holds one raw slice per level line, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSounding {
    pub header: FieldMap<String>,
    pub parameters: FieldMap<Vec<String>>,
}

impl RawSounding {
    /// Start a sounding from its header, with an empty column per parameter
    pub fn new(
        header: FieldMap<String>,
        parameter_names: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        let parameters = parameter_names
            .into_iter()
            .map(|name| (name, Vec::new()))
            .collect();
        Self { header, parameters }
    }

    /// Append one level's sliced fields to the parameter columns
    pub fn push_level(&mut self, level: FieldMap<String>) {
        for (name, value) in level {
            match self.parameters.get_mut(name) {
                Some(column) => column.push(value),
                None => {
                    self.parameters.insert(name, vec![value]);
                }
            }
        }
    }

    /// Trimmed header value
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.header.get(name).map(|v| v.trim())
    }

    fn header_or_empty(&self, name: &str) -> &str {
        self.header_value(name).unwrap_or_default()
    }

    /// Grouping key `"{YEAR}-{MONTH}-{DAY}"`, not validated as a calendar date
    pub fn date_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.header_or_empty("YEAR"),
            self.header_or_empty("MONTH"),
            self.header_or_empty("DAY")
        )
    }

    /// Reported hour of the sounding
    pub fn hour(&self) -> &str {
        self.header_or_empty("HOUR")
    }

    pub fn station_id(&self) -> &str {
        self.header_or_empty("ID")
    }

    /// Number of level lines accumulated for this sounding
    pub fn level_count(&self) -> usize {
        self.parameters.values().next().map_or(0, Vec::len)
    }

    /// Level count announced by the header's NUMLEV field
    pub fn declared_levels(&self) -> Option<usize> {
        self.header_value("NUMLEV")?.parse().ok()
    }

    /// Calendar date of the sounding, if the header holds a valid one
    pub fn observation_date(&self) -> Option<NaiveDate> {
        let year = self.header_value("YEAR")?.parse().ok()?;
        let month = self.header_value("MONTH")?.parse().ok()?;
        let day = self.header_value("DAY")?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Nominal date and hour; `None` when the hour is missing or invalid
    pub fn observation_time(&self) -> Option<NaiveDateTime> {
        let hour = self.hour().parse().ok()?;
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(self.observation_date()?.and_time(time))
    }
}

/// Converted header value
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// Trimmed text passed through unchanged
    Text(String),
    /// Numeric value in SI units, NaN when missing
    Number(f64),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(text) => Some(text),
            HeaderValue::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HeaderValue::Number(value) => Some(*value),
            HeaderValue::Text(_) => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => write!(f, "{}", text),
            HeaderValue::Number(value) => write!(f, "{:?}", value),
        }
    }
}

/// Converted column of per-level values
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValues {
    /// Physical quantities in SI units, NaN when missing
    Float(Vec<f64>),
    /// Integer codes such as level types, `None` when the column is blank
    Integer(Vec<Option<i64>>),
    /// Trimmed text such as quality flags
    Text(Vec<String>),
}

impl ParameterValues {
    pub fn len(&self) -> usize {
        match self {
            ParameterValues::Float(values) => values.len(),
            ParameterValues::Integer(values) => values.len(),
            ParameterValues::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            ParameterValues::Float(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[Option<i64>]> {
        match self {
            ParameterValues::Integer(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            ParameterValues::Text(values) => Some(values),
            _ => None,
        }
    }

    /// Format one level for display; floats use `precision` decimals
    pub fn format_at(&self, index: usize, precision: usize) -> Option<String> {
        match self {
            ParameterValues::Float(values) => {
                values.get(index).map(|v| format!("{:.*}", precision, v))
            }
            ParameterValues::Integer(values) => values.get(index).map(|v| match v {
                Some(code) => code.to_string(),
                None => String::new(),
            }),
            ParameterValues::Text(values) => values.get(index).cloned(),
        }
    }
}

/// One sounding after unit conversion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertedSounding {
    pub header: FieldMap<HeaderValue>,
    pub parameters: FieldMap<ParameterValues>,
}

impl ConvertedSounding {
    pub fn station_id(&self) -> Option<&str> {
        self.header.get("ID").and_then(HeaderValue::as_str)
    }

    pub fn level_count(&self) -> usize {
        self.parameters.values().next().map_or(0, ParameterValues::len)
    }

    /// Float column by field name
    pub fn floats(&self, name: &str) -> Option<&[f64]> {
        self.parameters.get(name).and_then(ParameterValues::as_floats)
    }
}
