//! Application constants for the IGRA2 processor
//!
//! This module contains the line markers, missing-value sentinels and unit
//! conversion factors shared by the parser, the converter and the display.

// =============================================================================
// Line Layout
// =============================================================================

/// Character in column 1 that marks a sounding header line
pub const HEADER_MARKER: u8 = b'#';

/// Hour value meaning "hour of the sounding is missing"
pub const MISSING_HOUR: &str = "99";

/// Separator between the missing-hour sentinel and its per-date counter
pub const MISSING_HOUR_SEPARATOR: char = '_';

// =============================================================================
// Missing Value Sentinels
// =============================================================================

/// Sentinels used by the observation dialect
pub mod observations {
    /// Header fields (NUMLEV, LAT, LON) leave missing values blank
    pub const HEADER_MISSING: &str = "";

    /// Level value is missing
    pub const MISSING: f64 = -9999.0;

    /// Level value was removed by quality assurance
    pub const REMOVED: f64 = -8888.0;

    /// Both level sentinels
    pub const LEVEL_SENTINELS: &[f64] = &[MISSING, REMOVED];

    /// Pressure only ever uses the plain missing sentinel
    pub const PRESSURE_SENTINELS: &[f64] = &[MISSING];
}

/// Sentinels used by the derived dialect
pub mod derived {
    /// Missing header value, compared against the trimmed raw text
    pub const HEADER_MISSING: &str = "-99999";

    /// Missing level value, compared numerically
    pub const MISSING: f64 = -99999.0;

    /// All level sentinels
    pub const LEVEL_SENTINELS: &[f64] = &[MISSING];
}

// =============================================================================
// Unit Conversion
// =============================================================================

/// Offset from degrees Celsius to Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Values stored in tenths of a unit
pub const TENTHS: f64 = 10.0;

/// Values stored in hundredths of a unit
pub const HUNDREDTHS: f64 = 100.0;

/// Gradients stored as tenths of a unit per kilometre, converted to per metre
pub const TENTHS_PER_KM: f64 = 10_000.0;

// =============================================================================
// Display
// =============================================================================

/// Layout constants for the sounding table renderer
pub mod display {
    /// Width of the rule printed above each sounding
    pub const RULE_WIDTH: usize = 150;

    /// Right-justification width of header and unit labels
    pub const LABEL_WIDTH: usize = 20;

    /// Padding added to each parameter column beyond its name length
    pub const COLUMN_PADDING: usize = 7;

    /// Decimal places for floating point values
    pub const FLOAT_PRECISION: usize = 2;

    /// Header field omitted from the header listing
    pub const HIDDEN_HEADER_FIELD: &str = "HEADREC";
}

// =============================================================================
// Logging
// =============================================================================

/// Crate target used in the default log filter
pub const LOG_TARGET: &str = "igra2_processor";

/// Default log level when neither --verbose nor --quiet is given
pub const DEFAULT_LOG_LEVEL: &str = "info";
