//! Tests for grouping records into a directory tree

use super::{record, unbounded_record};
use crate::app::models::{NumericField, ProcessingWarning};
use crate::app::services::tree_builder::HierarchyBuilder;

#[test]
fn test_build_groups_by_container() {
    let records = vec![
        record("Plant.Absorber.Stage(1).temperature", 350.0),
        record("Plant.Absorber.Stage(1).pressure", 101325.0),
        record("Plant.Stripper.reboiler_duty", 1.2e6),
        record("Plant.Absorber.Stage(2).temperature", 345.0),
    ];

    let result = HierarchyBuilder::new().build(records);
    assert_eq!(result.stats.records_grouped, 4);
    assert_eq!(result.stats.containers, 3);
    assert!(result.stats.warnings.is_empty());

    // Containers in first-seen order
    let containers = result.tree.containers();
    assert_eq!(containers[0].dotted(), "Plant.Absorber.Stage(1)");
    assert_eq!(containers[1].dotted(), "Plant.Stripper");
    assert_eq!(containers[2].dotted(), "Plant.Absorber.Stage(2)");
    assert_eq!(containers[0].records.len(), 2);
}

#[test]
fn test_duplicate_path_keeps_last_value_in_place() {
    let records = vec![
        record("Plant.x", 1.0),
        record("Plant.y", 2.0),
        record("Plant.x", 9.0),
    ];

    let result = HierarchyBuilder::new().build(records);
    assert_eq!(result.stats.records_grouped, 2);
    assert_eq!(result.stats.warnings.len(), 1);
    assert!(matches!(
        result.stats.warnings[0],
        ProcessingWarning::DuplicatePath { .. }
    ));

    let table = &result.tree.containers()[0];
    assert_eq!(table.records[0].path.local_name(), "x");
    assert_eq!(table.records[0].value, NumericField::Present(9.0));
    assert_eq!(table.records[1].path.local_name(), "y");
}

#[test]
fn test_bare_path_goes_to_root_with_warning() {
    let records = vec![
        record("Plant.Absorber.temperature", 350.0),
        unbounded_record("Hold_up", 42.0),
    ];

    let result = HierarchyBuilder::new().build(records);
    assert_eq!(result.stats.warnings.len(), 1);
    match &result.stats.warnings[0] {
        ProcessingWarning::NoContainer { name } => assert_eq!(name, "Hold_up"),
        other => panic!("expected NoContainer warning, got {:?}", other),
    }

    let root = result
        .tree
        .containers()
        .iter()
        .find(|c| c.is_root())
        .expect("root container present");
    assert_eq!(root.records.len(), 1);
    assert_eq!(root.records[0].path.local_name(), "Hold_up");
}

#[test]
fn test_empty_input_produces_empty_tree() {
    let result = HierarchyBuilder::new().build(Vec::new());
    assert!(result.tree.is_empty());
    assert_eq!(result.stats.records_grouped, 0);
    assert_eq!(result.stats.containers, 0);
}

#[test]
fn test_parenthesised_names_stay_whole() {
    let records = vec![record("Plant.Absorber.a_abs_profile(1,4)", 0.25)];
    let result = HierarchyBuilder::new().build(records);

    let table = &result.tree.containers()[0];
    assert_eq!(table.dotted(), "Plant.Absorber");
    assert_eq!(table.records[0].path.local_name(), "a_abs_profile(1,4)");
}
