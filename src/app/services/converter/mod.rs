//! Raw to SI conversion
//!
//! The converter walks a [`RawStore`] and builds a parallel
//! [`ConvertedStore`] with the same dates, hours, field names and column
//! lengths. Each field is converted by the rule its dialect assigns to it:
//!
//! - [`rules`] - Header and parameter rule types and the rule table
//! - [`observations`] - Rules for observation files
//! - [`derived`] - Rules for derived-parameter files
//!
//! Missing values of every kind become NaN in float fields; no numeric
//! sentinel survives conversion.

pub mod derived;
pub mod observations;
pub mod rules;

#[cfg(test)]
mod tests;

use tracing::{debug, info};

use crate::app::models::{
    ConvertedSounding, ConvertedStore, Dialect, FieldMap, RawSounding, RawStore,
};
use crate::{Error, Result};
use rules::RuleTable;

/// Converts raw soundings of one dialect
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    dialect: Dialect,
    rules: &'static RuleTable,
}

impl Converter {
    pub fn new(dialect: Dialect) -> Self {
        let rules = match dialect {
            Dialect::Observations => &observations::RULES,
            Dialect::Derived => &derived::RULES,
        };
        Self { dialect, rules }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn rules(&self) -> &'static RuleTable {
        self.rules
    }

    /// Convert every sounding of a raw store into a fresh converted store
    pub fn convert(&self, raw: &RawStore) -> Result<ConvertedStore> {
        let mut converted = ConvertedStore::new();

        for (date, hour, sounding) in raw.iter() {
            let sounding = self.convert_sounding(date, hour, sounding)?;
            converted.insert(date, hour, sounding);
        }

        info!(
            "Converted {} {} soundings over {} dates",
            converted.sounding_count(),
            self.dialect,
            converted.len()
        );
        Ok(converted)
    }

    /// Convert one sounding; `date` and `hour` only label errors
    pub fn convert_sounding(
        &self,
        date: &str,
        hour: &str,
        sounding: &RawSounding,
    ) -> Result<ConvertedSounding> {
        let mut header = FieldMap::with_capacity(sounding.header.len());
        for (name, raw) in sounding.header.iter() {
            let value = self
                .rules
                .header_rule(name)
                .apply(raw)
                .map_err(|e| Error::value_parse(date, hour, name, e.0))?;
            header.insert(name, value);
        }

        let mut parameters = FieldMap::with_capacity(sounding.parameters.len());
        for (name, column) in sounding.parameters.iter() {
            let values = self
                .rules
                .parameter_rule(name)
                .apply(column)
                .map_err(|e| Error::value_parse(date, hour, name, e.0))?;
            parameters.insert(name, values);
        }

        debug!(
            "Converted sounding {} {} ({} levels)",
            date,
            hour,
            sounding.level_count()
        );
        Ok(ConvertedSounding { header, parameters })
    }
}
