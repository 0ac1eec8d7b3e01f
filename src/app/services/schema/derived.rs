//! Column layout of IGRA2 derived-parameter files (`igra2-derived-format.txt`)
//!
//! The header carries sounding-wide indices (precipitable water, inversion,
//! mixed layer, freezing level, LCL/LFC/LNB, stability indices, CAPE/CIN);
//! each level record carries derived thermodynamic and wind quantities.
//! Missing values are -99999 in both line kinds.

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
    SchemaEntry::new("NUMLEV", 32, 36, "-", "-"),
    // precipitable water between the surface and 500 hPa
    SchemaEntry::new("PW", 38, 43, "mm*100", "mm"),
    // warmest level, only when above the surface
    SchemaEntry::new("INVPRESS", 44, 49, "Pa", "Pa"),
    SchemaEntry::new("INVHGT", 50, 55, "m", "m"),
    SchemaEntry::new("INVTEMPDIF", 56, 61, "K*10", "K"),
    // top of the mixed layer, parcel method
    SchemaEntry::new("MIXPRESS", 62, 67, "Pa", "Pa"),
    SchemaEntry::new("MIXHGT", 68, 73, "m", "m"),
    SchemaEntry::new("FRZPRESS", 74, 79, "Pa", "Pa"),
    SchemaEntry::new("FRZHGT", 80, 85, "m", "m"),
    SchemaEntry::new("LCLPRESS", 86, 91, "Pa", "Pa"),
    SchemaEntry::new("LCLHGT", 92, 97, "m", "m"),
    SchemaEntry::new("LFCPRESS", 98, 103, "Pa", "Pa"),
    SchemaEntry::new("LFCHGT", 104, 109, "m", "m"),
    SchemaEntry::new("LNBPRESS", 110, 115, "Pa", "Pa"),
    SchemaEntry::new("LNBHGT", 116, 121, "m", "m"),
    SchemaEntry::new("LI", 122, 127, "deg C", "K"),
    SchemaEntry::new("SI", 128, 133, "deg C", "K"),
    SchemaEntry::new("KI", 134, 139, "deg C", "K"),
    SchemaEntry::new("TTI", 140, 145, "deg C", "K"),
    SchemaEntry::new("CAPE", 146, 151, "J/kg", "J/kg"),
    SchemaEntry::new("CIN", 152, 157, "J/kg", "J/kg"),
];

pub const PARAMETERS: &[SchemaEntry] = &[
    SchemaEntry::new("PRESS", 1, 7, "Pa", "Pa"),
    SchemaEntry::new("REPGPH", 9, 15, "m", "m"),
    SchemaEntry::new("CALCGPH", 17, 23, "m", "m"),
    SchemaEntry::new("TEMP", 25, 31, "K * 10", "K"),
    SchemaEntry::new("TEMPGRAD", 33, 39, "(K/km) * 10", "K/m"),
    SchemaEntry::new("PTEMP", 41, 47, "K * 10", "K"),
    SchemaEntry::new("PTEMPGRAD", 49, 55, "(K/km) * 10", "K/m"),
    SchemaEntry::new("VTEMP", 57, 63, "K * 10", "K"),
    SchemaEntry::new("VPTEMP", 65, 71, "K * 10", "K"),
    SchemaEntry::new("VAPPRESS", 73, 79, "mb * 1000", "Pa"),
    SchemaEntry::new("SATVAP", 81, 87, "mb * 1000", "Pa"),
    SchemaEntry::new("REPRH", 89, 95, "% * 10", "%"),
    SchemaEntry::new("CALCRH", 97, 103, "% * 10", "%"),
    SchemaEntry::new("RHGRAD", 105, 111, "(%/km) * 10", "%/m"),
    SchemaEntry::new("UWND", 113, 119, "(m/s) * 10", "m/s"),
    SchemaEntry::new("UWDGRAD", 121, 127, "(m/s per km) * 10", "(m/s) / m"),
    SchemaEntry::new("VWND", 129, 135, "(m/s) * 10", "m/s"),
    SchemaEntry::new("VWNDGRAD", 137, 143, "(m/s per km) * 10", "(m/s) / m"),
    // refractive index
    SchemaEntry::new("N", 145, 151, "-", "-"),
];

pub static SCHEMA: DialectSchema = DialectSchema {
    dialect: Dialect::Derived,
    header: HEADER,
    parameters: PARAMETERS,
};
