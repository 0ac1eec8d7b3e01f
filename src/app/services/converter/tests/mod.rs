//! Tests for the raw to SI converter

use crate::app::models::{ConvertedStore, Dialect, ParameterValues, RawStore};
use crate::app::services::igra_parser::IgraReader;


const EPS: f64 = 1e-9;

/// Parse content with a reader of the given dialect and return its raw store
fn raw_store(dialect: Dialect, content: &str) -> RawStore {
    let mut reader = IgraReader::new(dialect, "fixture.txt");
    reader.parse_str(content).unwrap();
    reader.raw_data().clone()
}

/// Float equality that treats NaN as equal to NaN
fn same_float(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() < EPS
}

fn same_values(a: &ParameterValues, b: &ParameterValues) -> bool {
    match (a, b) {
        (ParameterValues::Float(a), ParameterValues::Float(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_float(*x, *y))
        }
        _ => a == b,
    }
}

/// Stores match in keys, field names, lengths and values
fn assert_same_store(a: &ConvertedStore, b: &ConvertedStore) {
    let left: Vec<_> = a.iter().map(|(d, h, _)| (d, h)).collect();
    let right: Vec<_> = b.iter().map(|(d, h, _)| (d, h)).collect();
    assert_eq!(left, right);

    for (date, hour, sounding) in a.iter() {
        let other = b.get(date, hour).unwrap();
        for (name, values) in sounding.parameters.iter() {
            assert!(
                same_values(values, other.parameters.get(name).unwrap()),
                "{} {} {}",
                date,
                hour,
                name
            );
        }
    }
}

/// Every raw key and field is present after conversion with the same length
fn assert_structural_parity(raw: &RawStore, converted: &ConvertedStore) {
    assert_eq!(raw.len(), converted.len());
    assert_eq!(raw.sounding_count(), converted.sounding_count());

    for (date, hour, sounding) in raw.iter() {
        let out = converted.get(date, hour).unwrap();
        assert_eq!(
            sounding.header.names().collect::<Vec<_>>(),
            out.header.names().collect::<Vec<_>>()
        );
        assert_eq!(
            sounding.parameters.names().collect::<Vec<_>>(),
            out.parameters.names().collect::<Vec<_>>()
        );
        for (name, column) in sounding.parameters.iter() {
            assert_eq!(column.len(), out.parameters.get(name).unwrap().len(), "{}", name);
        }
    }
}

/// No float value equals one of the dialect's numeric sentinels
fn assert_no_sentinels(converted: &ConvertedStore, sentinels: &[f64]) {
    for (_, _, sounding) in converted.iter() {
        for (name, values) in sounding.parameters.iter() {
            if let Some(floats) = values.as_floats() {
                assert!(
                    floats.iter().all(|v| !sentinels.contains(v)),
                    "sentinel left in {}",
                    name
                );
            }
        }
        for (name, value) in sounding.header.iter() {
            if let Some(v) = value.as_f64() {
                assert!(!sentinels.contains(&v), "sentinel left in header {}", name);
            }
        }
    }
}
