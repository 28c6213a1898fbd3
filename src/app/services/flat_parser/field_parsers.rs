//! Numeric field classification shared by the flat parser and tree reader

/// Outcome of interpreting one raw numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericParse {
    /// A finite decimal value
    Value(f64),
    /// The field was empty: a first-class absent state, not a failure
    Empty,
    /// The field held text that is not a finite number
    Failed,
}

/// Classify a raw numeric field after trimming surrounding whitespace.
/// Non-finite parses (`inf`, `nan`) are rejected rather than stored.
pub fn classify_numeric(raw: &str) -> NumericParse {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NumericParse::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => NumericParse::Value(value),
        _ => NumericParse::Failed,
    }
}
