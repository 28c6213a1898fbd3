//! Test fixtures and helpers for hierarchy building and table writing

use crate::app::models::{NumericField, VariablePath, VariableRecord};

// Test modules
mod builder_tests;
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

/// Build a record whose bounds are absent
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
