//! Fixtures shared by the IGRA2 parser tests
//!
//! Lines are built with the exact column layouts of the two dialects so
//! that tests can vary dates, hours and level counts freely.

use std::io::Write;
use tempfile::NamedTempFile;


pub const STATION: &str = "SWM00002527";

/// Observation level lines: surface, a standard level with a removed
/// dewpoint, and a level with every measurement missing
pub const OBS_LEVELS: [&str; 3] = [
    "21 -9999 101300A    8A  113A  850    25    90    52",
    "10   120  85000  1457B  -55B-9999 -8888   270   153",
    "30 -8888  50000  5570 -8888 -9999 -9999 -9999 -9999",
];

/// Observation header line
pub fn obs_header(year: &str, month: &str, day: &str, hour: &str, numlev: usize) -> String {
    format!(
        "#{:<11} {:>4} {:>2} {:>2} {:>2} {:>4} {:>4} {:<8} {:<8} {:>7} {:>8}",
        STATION, year, month, day, hour, "2315", numlev, "ncdc6310", "ncdc6310", "586000", "165000"
    )
}

/// Header followed by the first `levels` observation level lines
pub fn obs_sounding(year: &str, month: &str, day: &str, hour: &str, levels: usize) -> String {
    let mut lines = vec![obs_header(year, month, day, hour, levels)];
    lines.extend(OBS_LEVELS.iter().take(levels).map(|l| l.to_string()));
    lines.join("\n")
}

/// Derived header line; PW is 3400 (34 mm), LI is 12 and CIN is missing
pub fn derived_header(year: &str, month: &str, day: &str, hour: &str, numlev: usize) -> String {
    let indices: [i64; 19] = [
        -99999, -99999, -99999, 92500, 780, -99999, -99999, 90000, 950, -99999, -99999, -99999,
        -99999, 12, -3, 25, 45, 0, -99999,
    ];
    let packed: String = indices.iter().map(|v| format!("{:>6}", v)).collect();
    format!(
        "#{:<11} {:>4} {:>2} {:>2} {:>2} {:>4}{:>5} {:>6}{}",
        STATION, year, month, day, hour, "2300", numlev, 3400, packed
    )
}

/// Derived level values, in field order
pub const DERIVED_LEVELS: [[i64; 19]; 2] = [
    [
        101300, 15, 15, 2843, -65, 2843, 30, 2850, 2850, 12000, 16000, 750, 750, -20, -15, 5, 32,
        10, 313,
    ],
    [
        85000, 1457, 1460, 2760, -99999, 2900, 40, 2765, 2905, 5000, 7000, -99999, 714, -99999,
        -50, -3, 60, -99999, 270,
    ],
];

/// Derived level line
pub fn derived_level(values: &[i64; 19]) -> String {
    values
        .iter()
        .map(|v| format!("{:>7}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header followed by the first `levels` derived level lines
pub fn derived_sounding(year: &str, month: &str, day: &str, hour: &str, levels: usize) -> String {
    let mut lines = vec![derived_header(year, month, day, hour, levels)];
    lines.extend(DERIVED_LEVELS.iter().take(levels).map(derived_level));
    lines.join("\n")
}

/// Join soundings into file content with a trailing newline
pub fn file_content(soundings: &[String]) -> String {
    let mut content = soundings.join("\n");
    content.push('\n');
    content
}

/// Write content to a temporary file
pub fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_fixture_line_widths() {
    assert_eq!(obs_header("2018", "01", "01", "00", 3).len(), 71);
    assert!(OBS_LEVELS.iter().all(|l| l.len() == 51));
    assert_eq!(derived_header("2020", "05", "26", "00", 2).len(), 157);
    assert_eq!(derived_level(&DERIVED_LEVELS[0]).len(), 151);
}
