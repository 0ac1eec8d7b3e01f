//! Configuration management and validation.
//!
//! Provides the reader configuration: how short lines and duplicate
//! sounding hours are handled, and which hour value means "missing".
//! Configuration can be built in code, loaded from a JSON file, or
//! overridden from the command line.

use crate::constants::MISSING_HOUR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// What to do with a line shorter than a schema column range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// Fail with `Error::MalformedLine`
    #[default]
    Strict,
    /// Read the truncated slice, which may be empty
    Lenient,
}

/// What to do when two soundings share a reported hour on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateHourPolicy {
    /// Replace the earlier sounding and log a warning
    #[default]
    Overwrite,
    /// Fail with `Error::DuplicateSounding`
    Reject,
}

impl FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!(
                "Invalid malformed line policy '{}' (expected 'strict' or 'lenient')",
                other
            )),
        }
    }
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for DuplicateHourPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Invalid duplicate hour policy '{}' (expected 'overwrite' or 'reject')",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicateHourPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Handling of lines shorter than the schema
    pub malformed_lines: MalformedLinePolicy,

    /// Handling of repeated non-missing hours within a date
    pub duplicate_hours: DuplicateHourPolicy,

    /// Ignore whitespace-only lines instead of reading them as levels
    pub skip_blank_lines: bool,

    /// Hour value that marks a sounding without a known hour
    pub missing_hour: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::default(),
            duplicate_hours: DuplicateHourPolicy::default(),
            skip_blank_lines: true,
            missing_hour: MISSING_HOUR.to_string(),
        }
    }
}

impl ReaderConfig {
    /// Set the malformed line policy
    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    /// Set the duplicate hour policy
    pub fn with_duplicate_hours(mut self, policy: DuplicateHourPolicy) -> Self {
        self.duplicate_hours = policy;
        self
    }

    /// Read whitespace-only lines as levels instead of skipping them
    pub fn with_blank_lines_as_levels(mut self) -> Self {
        self.skip_blank_lines = false;
        self
    }

    /// Set the missing hour sentinel
    pub fn with_missing_hour(mut self, missing_hour: impl Into<String>) -> Self {
        self.missing_hour = missing_hour.into();
        self
    }

    /// Check that the configuration can be used for reading
    pub fn validate(&self) -> Result<()> {
        let hour = self.missing_hour.trim();
        if hour.is_empty() {
            return Err(Error::configuration("missing_hour must not be empty"));
        }
        if hour.len() > 2 || !hour.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::configuration(format!(
                "missing_hour must be one or two digits, got '{}'",
                self.missing_hour
            )));
        }
        Ok(())
    }

    /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config = Self::from_json_str(&content)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Strict);
        assert_eq!(config.duplicate_hours, DuplicateHourPolicy::Overwrite);
        assert!(config.skip_blank_lines);
        assert_eq!(config.missing_hour, "99");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ReaderConfig::default()
            .with_malformed_lines(MalformedLinePolicy::Lenient)
            .with_duplicate_hours(DuplicateHourPolicy::Reject)
            .with_blank_lines_as_levels();

        assert_eq!(config.malformed_lines, MalformedLinePolicy::Lenient);
        assert_eq!(config.duplicate_hours, DuplicateHourPolicy::Reject);
        assert!(!config.skip_blank_lines);
    }

    #[test]
    fn test_validate_rejects_bad_missing_hour() {
        assert!(ReaderConfig::default().with_missing_hour("").validate().is_err());
        assert!(ReaderConfig::default().with_missing_hour("999").validate().is_err());
        assert!(ReaderConfig::default().with_missing_hour("x9").validate().is_err());
        assert!(ReaderConfig::default().with_missing_hour("88").validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ReaderConfig::from_json_str(r#"{"malformed_lines": "lenient"}"#).unwrap();
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Lenient);
        assert_eq!(config.duplicate_hours, DuplicateHourPolicy::Overwrite);
        assert_eq!(config.missing_hour, "99");
    }

    #[test]
    fn test_invalid_json() {
        let result = ReaderConfig::from_json_str(r#"{"duplicate_hours": "sometimes"}"#);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_json_file_round_trip() {
        let config = ReaderConfig::default().with_duplicate_hours(DuplicateHourPolicy::Reject);
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = ReaderConfig::from_json_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_json_file() {
        let result = ReaderConfig::from_json_file(Path::new("/nonexistent/igra2.json"));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Lenient".parse::<MalformedLinePolicy>().unwrap(),
            MalformedLinePolicy::Lenient
        );
        assert_eq!(
            "reject".parse::<DuplicateHourPolicy>().unwrap(),
            DuplicateHourPolicy::Reject
        );
        assert!("maybe".parse::<DuplicateHourPolicy>().is_err());
    }
}
