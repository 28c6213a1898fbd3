//! Test fixtures and helpers for flat-file writing and ordering

use crate::app::models::{NumericField, VariablePath, VariableRecord};

mod writer_tests;

/// Build a record with present value and bounds
pub fn record(path: &str, value: f64) -> VariableRecord {
    VariableRecord {
        path: VariablePath::parse(path).unwrap(),
        value: NumericField::Present(value),
        lower_bound: NumericField::Present(0.0),
        upper_bound: NumericField::Present(value * 2.0),
        var_type: "Temperature".to_string(),
        units: "K".to_string(),
    }
}

/// Build a record whose bounds and units are absent
pub fn unbounded_record(path: &str, value: f64) -> VariableRecord {
    VariableRecord {
        path: VariablePath::parse(path).unwrap(),
        value: NumericField::Present(value),
        lower_bound: NumericField::Absent,
        upper_bound: NumericField::Absent,
        var_type: "notype".to_string(),
        units: String::new(),
    }
}
