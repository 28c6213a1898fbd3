//! Tests for serializing a tree to nested container tables

use super::{record, unbounded_record};
use crate::app::services::tree_builder::{HierarchyBuilder, TableWriter, format_table_row};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_format_table_row() {
    let row = format_table_row(&record("Plant.Absorber.Stage(1).temperature", 350.0));
    assert_eq!(
        row,
        "temperature,3.5000000000000000e+02,0.0000000000000000e+00,7.0000000000000000e+02,Temperature,K"
    );
}

#[test]
fn test_format_table_row_absent_fields_are_empty_cells() {
    let row = format_table_row(&unbounded_record("Plant.Hold_up", 42.0));
    assert_eq!(row, "Hold_up,4.2000000000000000e+01,,,notype,");
}

#[test]
fn test_parsed_line_with_empty_bound_renders_empty_cell() {
    use crate::app::services::flat_parser::{FlatFileParser, ParseStats};

    let mut stats = ParseStats::new();
    let record = FlatFileParser::new()
        .parse_line(
            "Plant.Absorber.Stage(1).temperature : 3.5e+02 : : 4.5e+02 : Temperature : K",
            1,
            &mut stats,
        )
        .unwrap();

    assert_eq!(record.path.container().join("."), "Plant.Absorber.Stage(1)");
    assert_eq!(
        format_table_row(&record),
        "temperature,3.5000000000000000e+02,,4.5000000000000000e+02,Temperature,K"
    );
}

#[test]
fn test_write_tree_creates_nested_directories() {
    let records = vec![
        record("Plant.Absorber.Stage(1).temperature", 350.0),
        record("Plant.Absorber.Stage(1).pressure", 101325.0),
        record("Plant.Stripper.reboiler_duty", 1.2e6),
    ];
    let tree = HierarchyBuilder::new().build(records).tree;

    let temp = TempDir::new().unwrap();
    let written = TableWriter::new().write_tree(&tree, temp.path()).unwrap();
    assert_eq!(written, 2);

    let stage_table = temp
        .path()
        .join("Plant/Absorber/Stage(1)/variables.csv");
    let content = fs::read_to_string(&stage_table).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("temperature,"));
    assert!(lines[1].starts_with("pressure,"));

    assert!(temp.path().join("Plant/Stripper/variables.csv").exists());
    // Intermediate directories hold no table of their own
    assert!(!temp.path().join("Plant/variables.csv").exists());
}

#[test]
fn test_write_tree_root_container_table_at_output_root() {
    let tree = HierarchyBuilder::new()
        .build(vec![unbounded_record("Hold_up", 42.0)])
        .tree;

    let temp = TempDir::new().unwrap();
    TableWriter::new().write_tree(&tree, temp.path()).unwrap();
    assert!(temp.path().join("variables.csv").exists());
}

#[test]
fn test_write_tree_overwrites_existing_table() {
    let temp = TempDir::new().unwrap();
    let writer = TableWriter::new();

    let first = HierarchyBuilder::new()
        .build(vec![record("Plant.x", 1.0), record("Plant.y", 2.0)])
        .tree;
    writer.write_tree(&first, temp.path()).unwrap();

    let second = HierarchyBuilder::new()
        .build(vec![record("Plant.x", 9.0)])
        .tree;
    writer.write_tree(&second, temp.path()).unwrap();

    let content = fs::read_to_string(temp.path().join("Plant/variables.csv")).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("x,9.0000000000000000e+00,"));
}

#[test]
fn test_custom_table_file_name() {
    let tree = HierarchyBuilder::new()
        .build(vec![record("Plant.x", 1.0)])
        .tree;

    let temp = TempDir::new().unwrap();
    TableWriter::new()
        .with_table_file_name("vars.csv")
        .write_tree(&tree, temp.path())
        .unwrap();

    assert!(temp.path().join("Plant/vars.csv").exists());
    assert!(!temp.path().join("Plant/variables.csv").exists());
}
