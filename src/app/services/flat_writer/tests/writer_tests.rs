//! Tests for flat-file rendering and the gSTORE-4 envelope

use super::{record, unbounded_record};
use crate::app::services::flat_parser::FlatFileParser;
use crate::app::services::flat_writer::{FlatFileWriter, render_record};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_record_exact_format() {
    let line = render_record(&record("Plant.Absorber.Stage(1).temperature", 350.0));
    assert_eq!(
        line,
        "Plant.Absorber.Stage(1).temperature : 3.5000000000000000e+02 : \
         0.0000000000000000e+00 : 7.0000000000000000e+02 : Temperature : K"
    );
}

#[test]
fn test_render_record_absent_fields_are_empty() {
    let line = render_record(&unbounded_record("Plant.Hold_up", 42.0));
    assert_eq!(
        line,
        "Plant.Hold_up : 4.2000000000000000e+01 :  :  : notype :"
    );
}

#[test]
fn test_render_record_empty_units_has_no_trailing_space() {
    let line = render_record(&unbounded_record("Plant.Hold_up", 42.0));
    assert!(line.ends_with("notype :"));
    assert!(!line.ends_with(' '));
}

#[test]
fn test_render_envelope_structure() {
    let records = vec![record("Plant.x", 1.0), record("Plant.y", 2.0)];
    let content = FlatFileWriter::new()
        .with_process_name("absorber_run")
        .render(&records, "Mon Aug 24 10:15:42 2026");

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "#!gSTORE-4 created on Mon Aug 24 10:15:42 2026");
    assert_eq!(lines[1], "# PROCESS absorber_run");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "!Time");
    assert_eq!(lines[4], "\t0");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "# The total number of variables in the process");
    assert_eq!(lines[7], "# 2");
    assert_eq!(lines[8], "# Note: all variables are saved");
    assert_eq!(lines[9], "!Variables");
    assert_eq!(
        lines[10],
        "\t# PathName : Value : LowerBound : UpperBound : Type : Units"
    );
    assert!(lines[11].starts_with("\tPlant.x : "));
    assert!(lines[12].starts_with("\tPlant.y : "));
    assert_eq!(lines.len(), 13);
}

#[test]
fn test_render_is_deterministic() {
    let records = vec![record("Plant.x", 1.0), unbounded_record("Plant.y", 2.0)];
    let writer = FlatFileWriter::new();
    let first = writer.render(&records, "Mon Aug 24 10:15:42 2026");
    let second = writer.render(&records, "Mon Aug 24 10:15:42 2026");
    assert_eq!(first, second);
}

#[test]
fn test_written_file_parses_back() {
    let records = vec![
        record("Plant.Absorber.Stage(1).temperature", 350.0),
        unbounded_record("Plant.Hold_up", 42.0),
    ];

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reconstructed.txt");
    FlatFileWriter::new().write_file(&records, &path).unwrap();

    let reparsed = FlatFileParser::new().parse_file(&path).unwrap();
    assert_eq!(reparsed.records.len(), 2);
    assert_eq!(reparsed.records[0].path.dotted(), "Plant.Absorber.Stage(1).temperature");
    assert!(reparsed.records[1].lower_bound.is_absent());
    assert!(reparsed.stats.warnings.is_empty());

    // Header carries the signature and a parseable timestamp line
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#!gSTORE-4 created on "));
}
