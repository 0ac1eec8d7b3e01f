//! IGRA2 fixed-width parser
//!
//! This module turns an IGRA2 text file into a [`RawStore`](crate::RawStore)
//! of soundings keyed by date and hour.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`line`] - Line splitting, header/data classification and column slicing
//! - [`accumulator`] - Sounding state machine fed one line at a time
//! - [`store`] - Flushing a finished sounding into the keyed store
//! - [`parser`] - File handling and the public [`IgraReader`]
//! - [`stats`] - Line and sounding counters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use igra2_processor::IgraReader;
//!
//! # fn main() -> igra2_processor::Result<()> {
//! let mut reader = IgraReader::observations("SWM00002527-data.txt");
//! let stats = reader.parse()?;
//! println!("Stored {} soundings from {} lines", stats.soundings_stored, stats.total_lines);
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod line;
pub mod parser;
pub mod stats;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use accumulator::SoundingAccumulator;
pub use parser::IgraReader;
pub use stats::ParseStats;
