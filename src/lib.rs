//! IGRA2 Processor Library
//!
//! A Rust library for reading Integrated Global Radiosonde Archive (IGRA2)
//! sounding files and converting their scaled integer encoding into SI units.
//!
//! This library provides tools for:
//! - Slicing fixed-width header and level lines using per-dialect column schemas
//! - Grouping soundings by date and hour, disambiguating missing hours
//! - Converting raw values to floating point with NaN as the only missing marker
//! - Rendering a single sounding from either store as a text table
//!
//! Two file dialects are supported: observation files (`igra2-data-format`)
//! and derived-parameter files (`igra2-derived-format`).
//!
//! ```no_run
//! use igra2_processor::IgraReader;
//!
//! # fn main() -> igra2_processor::Result<()> {
//! let mut reader = IgraReader::derived("SWM00002527-drvd.txt");
//! reader.parse()?;
//! reader.convert()?;
//! println!("{}", reader.render("2020-05-26", "00", "converted")?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod display;
        pub mod igra_parser;
        pub mod schema;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    ConvertedSounding, ConvertedStore, Dialect, FieldMap, HeaderValue, ParameterValues,
    RawSounding, RawStore, Source,
};
pub use app::services::converter::Converter;
pub use app::services::igra_parser::{IgraReader, ParseStats};
pub use app::services::schema::{DialectSchema, LineKind, SchemaEntry};
pub use config::{DuplicateHourPolicy, MalformedLinePolicy, ReaderConfig};

/// Result type alias for the IGRA2 processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for IGRA2 reading, conversion and lookup
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is shorter than the column range of one of its fields
    #[error(
        "Malformed line {line_number}: field '{field}' needs {required} columns, line has {actual}"
    )]
    MalformedLine {
        line_number: usize,
        field: String,
        required: usize,
        actual: usize,
    },

    /// Two soundings share the same reported hour on the same date
    #[error("Duplicate sounding for date {date}, hour {hour}")]
    DuplicateSounding { date: String, hour: String },

    /// A raw value could not be parsed as the number its field requires
    #[error("Cannot convert field '{field}' value '{value}' (date {date}, hour {hour})")]
    ValueParse {
        date: String,
        hour: String,
        field: String,
        value: String,
    },

    /// Display source selector is neither "raw" nor "converted"
    #[error("The source should be 'converted' or 'raw', got '{selector}'")]
    InvalidSource { selector: String },

    /// Unrecognized file dialect name
    #[error("Unknown dialect: {name} (expected 'observations' or 'derived')")]
    UnknownDialect { name: String },

    /// Requested date or hour is not present in the store
    #[error("{}", key_not_found_message(.store, .date, .hour))]
    KeyNotFound {
        store: String,
        date: String,
        hour: Option<String>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn key_not_found_message(store: &str, date: &str, hour: &Option<String>) -> String {
    match hour {
        Some(hour) => format!("Hour {} not found for date {} in {} data", hour, date, store),
        None => format!("Date {} not in {} data", date, store),
    }
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed line error
    pub fn malformed_line(
        line_number: usize,
        field: impl Into<String>,
        required: usize,
        actual: usize,
    ) -> Self {
        Self::MalformedLine {
            line_number,
            field: field.into(),
            required,
            actual,
        }
    }

    /// Create a duplicate sounding error
    pub fn duplicate_sounding(date: impl Into<String>, hour: impl Into<String>) -> Self {
        Self::DuplicateSounding {
            date: date.into(),
            hour: hour.into(),
        }
    }

    /// Create a value conversion error
    pub fn value_parse(
        date: impl Into<String>,
        hour: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::ValueParse {
            date: date.into(),
            hour: hour.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid source selector error
    pub fn invalid_source(selector: impl Into<String>) -> Self {
        Self::InvalidSource {
            selector: selector.into(),
        }
    }

    /// Create an unknown dialect error
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect { name: name.into() }
    }

    /// Create an error for a date missing from a store
    pub fn date_not_found(store: impl Into<String>, date: impl Into<String>) -> Self {
        Self::KeyNotFound {
            store: store.into(),
            date: date.into(),
            hour: None,
        }
    }

    /// Create an error for an hour missing under an existing date
    pub fn hour_not_found(
        store: impl Into<String>,
        date: impl Into<String>,
        hour: impl Into<String>,
    ) -> Self {
        Self::KeyNotFound {
            store: store.into(),
            date: date.into(),
            hour: Some(hour.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error is a failed date/hour lookup
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid JSON: {}", error),
        }
    }
}
