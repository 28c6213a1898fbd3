//! Test fixtures and helpers for hierarchy reading

use std::fs;
use std::path::Path;
use tempfile::TempDir;


/// Lay out a small organized hierarchy:
///
/// ```text
/// root/
///   variables.csv                      (one bare variable)
///   Plant/
///     Absorber/
///       Stage(1)/variables.csv
///       Stage(2)/variables.csv
///     Stripper/variables.csv
/// ```
pub fn sample_hierarchy() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_table(temp.path(), "Hold_up,4.2000000000000000e+01,,,notype,\n");
    write_table(
        &temp.path().join("Plant/Absorber/Stage(1)"),
        "temperature,3.5000000000000000e+02,2.5000000000000000e+02,4.5000000000000000e+02,Temperature,K\n\
         pressure,1.0132500000000000e+05,,2.0000000000000000e+05,Pressure,Pa\n",
    );
    write_table(
        &temp.path().join("Plant/Absorber/Stage(2)"),
        "temperature,3.4500000000000000e+02,2.5000000000000000e+02,4.5000000000000000e+02,Temperature,K\n",
    );
    write_table(
        &temp.path().join("Plant/Stripper"),
        "reboiler_duty,1.2000000000000000e+06,0.0000000000000000e+00,1.0000000000000000e+08,Power,W\n",
    );
    temp
}

/// Write a table file into `dir`, creating the directory chain
pub fn write_table(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("variables.csv"), content).unwrap();
}
