//! Conversion rules for observation files
//!
//! Level values use -9999 (missing) and -8888 (removed by quality
//! assurance). Pressure only ever carries -9999. Temperatures and dewpoint
//! depressions are tenths of a degree Celsius and end up in Kelvin.

use super::rules::{HeaderRule, ParameterRule, RuleTable};
use crate::constants::observations::{HEADER_MISSING, LEVEL_SENTINELS, PRESSURE_SENTINELS};
use crate::constants::{CELSIUS_TO_KELVIN, TENTHS};

pub static RULES: RuleTable = RuleTable {
    header: &[
        ("NUMLEV", HeaderRule::number(HEADER_MISSING)),
        ("LAT", HeaderRule::number(HEADER_MISSING)),
        ("LON", HeaderRule::number(HEADER_MISSING)),
    ],
    parameters: &[
        ("LVLTYP1", ParameterRule::Integer),
        ("LVLTYP2", ParameterRule::Integer),
        // MMMSS is kept as read
        ("ETIME", ParameterRule::float(LEVEL_SENTINELS)),
        ("PRESS", ParameterRule::float(PRESSURE_SENTINELS)),
        ("PFLAG", ParameterRule::Text),
        ("GPH", ParameterRule::float(LEVEL_SENTINELS)),
        ("ZFLAG", ParameterRule::Text),
        (
            "TEMP",
            ParameterRule::scaled_offset(LEVEL_SENTINELS, TENTHS, CELSIUS_TO_KELVIN),
        ),
        ("TFLAG", ParameterRule::Text),
        ("RH", ParameterRule::scaled(LEVEL_SENTINELS, TENTHS)),
        (
            "DPDP",
            ParameterRule::scaled_offset(LEVEL_SENTINELS, TENTHS, CELSIUS_TO_KELVIN),
        ),
        (
            "WDIR",
            ParameterRule::Custom {
                sentinels: LEVEL_SENTINELS,
                transform: f64::to_radians,
            },
        ),
        ("WSPD", ParameterRule::scaled(LEVEL_SENTINELS, TENTHS)),
    ],
};
