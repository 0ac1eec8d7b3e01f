//! Conversion rules for derived-parameter files
//!
//! Header fields are missing when their trimmed text is exactly "-99999".
//! Every level field is numeric with -99999 as the only sentinel.

use super::rules::{HeaderRule, ParameterRule, RuleTable};
use crate::constants::derived::{HEADER_MISSING, LEVEL_SENTINELS};
use crate::constants::{CELSIUS_TO_KELVIN, HUNDREDTHS, TENTHS, TENTHS_PER_KM};

const NUMBER: HeaderRule = HeaderRule::number(HEADER_MISSING);
const KELVIN: HeaderRule = HeaderRule::offset(HEADER_MISSING, CELSIUS_TO_KELVIN);
const FLOAT: ParameterRule = ParameterRule::float(LEVEL_SENTINELS);
const TENTHS_RULE: ParameterRule = ParameterRule::scaled(LEVEL_SENTINELS, TENTHS);
const GRADIENT: ParameterRule = ParameterRule::scaled(LEVEL_SENTINELS, TENTHS_PER_KM);

pub static RULES: RuleTable = RuleTable {
    header: &[
        ("NUMLEV", NUMBER),
        ("PW", HeaderRule::scaled(HEADER_MISSING, HUNDREDTHS)),
        ("INVPRESS", NUMBER),
        ("INVHGT", NUMBER),
        ("INVTEMPDIF", HeaderRule::scaled(HEADER_MISSING, TENTHS)),
        ("MIXPRESS", NUMBER),
        ("MIXHGT", NUMBER),
        ("FRZPRESS", NUMBER),
        ("FRZHGT", NUMBER),
        ("LCLPRESS", NUMBER),
        ("LCLHGT", NUMBER),
        ("LFCPRESS", NUMBER),
        ("LFCHGT", NUMBER),
        ("LNBPRESS", NUMBER),
        ("LNBHGT", NUMBER),
        ("LI", KELVIN),
        ("SI", KELVIN),
        ("KI", KELVIN),
        ("TTI", KELVIN),
        ("CAPE", NUMBER),
        ("CIN", NUMBER),
    ],
    parameters: &[
        ("PRESS", FLOAT),
        ("REPGPH", FLOAT),
        ("CALCGPH", FLOAT),
        ("TEMP", TENTHS_RULE),
        ("TEMPGRAD", GRADIENT),
        ("PTEMP", TENTHS_RULE),
        ("PTEMPGRAD", GRADIENT),
        ("VTEMP", TENTHS_RULE),
        ("VPTEMP", TENTHS_RULE),
        // mb * 1000 is Pa * 10
        ("VAPPRESS", TENTHS_RULE),
        ("SATVAP", TENTHS_RULE),
        ("REPRH", TENTHS_RULE),
        ("CALCRH", TENTHS_RULE),
        ("RHGRAD", GRADIENT),
        ("UWND", TENTHS_RULE),
        ("UWDGRAD", GRADIENT),
        ("VWND", TENTHS_RULE),
        ("VWNDGRAD", GRADIENT),
        ("N", FLOAT),
    ],
};
