//! Column layout of IGRA2 observation files (`igra2-data-format.txt`)
//!
//! Header record:
//!
//! ```text
//! HEADREC  1-  1   "#"
//! ID       2- 12   station identification code
//! YEAR    14- 17
//! MONTH   19- 20
//! DAY     22- 23
//! HOUR    25- 26   nominal hour, 99 = missing
//! RELTIME 28- 31   release time HHMM, 9999 = missing
//! NUMLEV  33- 36   number of level records that follow
//! P_SRC   38- 45   data source code for pressure levels
//! NP_SRC  47- 54   data source code for non-pressure levels
//! LAT     56- 62   latitude at time of sounding
//! LON     64- 71   longitude at time of sounding
//! ```
//!
//! Level record:
//!
//! ```text
//! LVLTYP1  1- 1    major level type (1 standard, 2 other pressure, 3 non-pressure)
//! LVLTYP2  2- 2    minor level type (1 surface, 2 tropopause, 0 other)
//! ETIME    4- 8    elapsed time since launch, MMMSS
//! PRESS   10-15    pressure, Pa
//! PFLAG   16-16    pressure processing flag
//! GPH     17-21    geopotential height, m
//! ZFLAG   22-22    height processing flag
//! TEMP    23-27    temperature, degrees C * 10
//! TFLAG   28-28    temperature processing flag
//! RH      29-33    relative humidity, percent * 10
//! DPDP    35-39    dewpoint depression, degrees C * 10
//! WDIR    41-45    wind direction, degrees from north
//! WSPD    47-51    wind speed, m/s * 10
//! ```
//!
//! Level values use -9999 for missing and -8888 for removed by quality
//! assurance; header LAT, LON and NUMLEV are blank when missing.

use super::{DialectSchema, SchemaEntry};
use crate::app::models::Dialect;

pub const HEADER: &[SchemaEntry] = &[
    SchemaEntry::new("HEADREC", 1, 1, "-", "-"),
    SchemaEntry::new("ID", 2, 12, "-", "-"),
    SchemaEntry::new("YEAR", 14, 17, "yyyy", "yyyy"),
    SchemaEntry::new("MONTH", 19, 20, "mm", "mm"),
    SchemaEntry::new("DAY", 22, 23, "dd", "dd"),
    SchemaEntry::new("HOUR", 25, 26, "HH", "HH"),
    SchemaEntry::new("RELTIME", 28, 31, "HHMM", "HHMM"),
    SchemaEntry::new("NUMLEV", 33, 36, "-", "-"),
    SchemaEntry::new("P_SRC", 38, 45, "-", "-"),
    SchemaEntry::new("NP_SRC", 47, 54, "-", "-"),
    SchemaEntry::new("LAT", 56, 62, "-", "-"),
    SchemaEntry::new("LON", 64, 71, "-", "-"),
];

pub const PARAMETERS: &[SchemaEntry] = &[
    SchemaEntry::new("LVLTYP1", 1, 1, "-", "-"),
    SchemaEntry::new("LVLTYP2", 2, 2, "-", "-"),
    SchemaEntry::new("ETIME", 4, 8, "MMMSS", "MMMSS"),
    SchemaEntry::new("PRESS", 10, 15, "Pa", "Pa"),
    SchemaEntry::new("PFLAG", 16, 16, "-", "-"),
    SchemaEntry::new("GPH", 17, 21, "m", "m"),
    SchemaEntry::new("ZFLAG", 22, 22, "-", "-"),
    SchemaEntry::new("TEMP", 23, 27, "deg C * 10", "K"),
    SchemaEntry::new("TFLAG", 28, 28, "-", "-"),
    SchemaEntry::new("RH", 29, 33, "% * 10", "%"),
    SchemaEntry::new("DPDP", 35, 39, "deg C * 10", "K"),
    SchemaEntry::new("WDIR", 41, 45, "deg", "rad"),
    SchemaEntry::new("WSPD", 47, 51, "m/s * 10", "m/s"),
];

pub static SCHEMA: DialectSchema = DialectSchema {
    dialect: Dialect::Observations,
    header: HEADER,
    parameters: PARAMETERS,
};
