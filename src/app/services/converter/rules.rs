//! Conversion rules for header values and parameter columns
//!
//! Header rules compare the trimmed raw text against a sentinel string
//! before any parsing. Parameter rules parse first and compare numerically,
//! so "-9999" and "-9999.0" are the same missing value.

use crate::app::models::{HeaderValue, ParameterValues};

/// Raw text that a rule could not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue(pub String);

/// How one header field is converted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderRule {
    /// Trimmed text, unchanged
    Text,
    /// NaN when the trimmed text is empty or equals `sentinel`,
    /// else `value / divisor + offset`
    Number {
        sentinel: &'static str,
        divisor: f64,
        offset: f64,
    },
}

impl HeaderRule {
    /// Missing-aware number with no scaling
    pub const fn number(sentinel: &'static str) -> Self {
        Self::Number {
            sentinel,
            divisor: 1.0,
            offset: 0.0,
        }
    }

    pub const fn scaled(sentinel: &'static str, divisor: f64) -> Self {
        Self::Number {
            sentinel,
            divisor,
            offset: 0.0,
        }
    }

    pub const fn offset(sentinel: &'static str, offset: f64) -> Self {
        Self::Number {
            sentinel,
            divisor: 1.0,
            offset,
        }
    }

    pub fn apply(&self, raw: &str) -> Result<HeaderValue, InvalidValue> {
        let value = raw.trim();
        match *self {
            HeaderRule::Text => Ok(HeaderValue::Text(value.to_string())),
            HeaderRule::Number {
                sentinel,
                divisor,
                offset,
            } => {
                if value.is_empty() || value == sentinel {
                    return Ok(HeaderValue::Number(f64::NAN));
                }
                let number = parse_float(value)?;
                Ok(HeaderValue::Number(number / divisor + offset))
            }
        }
    }
}

/// How one parameter column is converted
#[derive(Debug, Clone, Copy)]
pub enum ParameterRule {
    /// Trimmed text, such as quality flags
    Text,
    /// Integer codes; a blank value is `None`
    Integer,
    /// Sentinels to NaN, then `value / divisor + offset`
    Linear {
        sentinels: &'static [f64],
        divisor: f64,
        offset: f64,
    },
    /// Sentinels to NaN, then an arbitrary unit transform
    Custom {
        sentinels: &'static [f64],
        transform: fn(f64) -> f64,
    },
}

impl ParameterRule {
    /// Sentinels to NaN, no scaling
    pub const fn float(sentinels: &'static [f64]) -> Self {
        Self::Linear {
            sentinels,
            divisor: 1.0,
            offset: 0.0,
        }
    }

    pub const fn scaled(sentinels: &'static [f64], divisor: f64) -> Self {
        Self::Linear {
            sentinels,
            divisor,
            offset: 0.0,
        }
    }

    pub const fn scaled_offset(sentinels: &'static [f64], divisor: f64, offset: f64) -> Self {
        Self::Linear {
            sentinels,
            divisor,
            offset,
        }
    }

    pub fn apply(&self, raw: &[String]) -> Result<ParameterValues, InvalidValue> {
        match *self {
            ParameterRule::Text => Ok(ParameterValues::Text(
                raw.iter().map(|v| v.trim().to_string()).collect(),
            )),
            ParameterRule::Integer => raw
                .iter()
                .map(|v| {
                    let value = v.trim();
                    if value.is_empty() {
                        return Ok(None);
                    }
                    value
                        .parse::<i64>()
                        .map(Some)
                        .map_err(|_| InvalidValue(value.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ParameterValues::Integer),
            ParameterRule::Linear {
                sentinels,
                divisor,
                offset,
            } => convert_floats(raw, sentinels, |v| v / divisor + offset),
            ParameterRule::Custom {
                sentinels,
                transform,
            } => convert_floats(raw, sentinels, transform),
        }
    }
}

fn parse_float(value: &str) -> Result<f64, InvalidValue> {
    value
        .parse::<f64>()
        .map_err(|_| InvalidValue(value.to_string()))
}

/// Parse, map sentinels to NaN, then transform the remaining values
///
/// An empty slice (a blank column or a truncated lenient read) is missing.
fn convert_floats(
    raw: &[String],
    sentinels: &[f64],
    transform: impl Fn(f64) -> f64,
) -> Result<ParameterValues, InvalidValue> {
    raw.iter()
        .map(|v| {
            let value = v.trim();
            if value.is_empty() {
                return Ok(f64::NAN);
            }
            let number = parse_float(value)?;
            if sentinels.contains(&number) {
                Ok(f64::NAN)
            } else {
                Ok(transform(number))
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ParameterValues::Float)
}

/// Per-field rules of one dialect
#[derive(Debug)]
pub struct RuleTable {
    pub header: &'static [(&'static str, HeaderRule)],
    pub parameters: &'static [(&'static str, ParameterRule)],
}

impl RuleTable {
    /// Rule for a header field; fields without an entry pass through as text
    pub fn header_rule(&self, name: &str) -> HeaderRule {
        self.header
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(HeaderRule::Text, |(_, rule)| *rule)
    }

    /// Rule for a parameter field; fields without an entry pass through as text
    pub fn parameter_rule(&self, name: &str) -> ParameterRule {
        self.parameters
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(ParameterRule::Text, |(_, rule)| *rule)
    }
}
