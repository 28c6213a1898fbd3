//! Test fixtures and helpers for flat-file parser testing

use std::io::Write;
use tempfile::NamedTempFile;


/// A small but complete gSTORE-4 file: envelope, several good records,
/// one record with an empty lower bound, and an empty-units record
pub fn sample_flat_file() -> String {
    "#!gSTORE-4 created on Mon Aug 24 10:15:42 2026\n\
     # PROCESS absorber_run\n\
     \n\
     !Time\n\
     \t0\n\
     \n\
     # The total number of variables in the process\n\
     # 4\n\
     # Note: all variables are saved\n\
     !Variables\n\
     \t# PathName : Value : LowerBound : UpperBound : Type : Units\n\
     \tPlant.Absorber.Stage(1).temperature : 3.5000000000000000e+02 : 2.5000000000000000e+02 : 4.5000000000000000e+02 : Temperature : K\n\
     \tPlant.Absorber.Stage(1).pressure : 1.0132500000000000e+05 : : 2.0000000000000000e+05 : Pressure : Pa\n\
     \tPlant.Stripper.reboiler_duty : 1.2000000000000000e+06 : 0.0000000000000000e+00 : 1.0000000000000000e+08 : Power : W\n\
     \tPlant.Hold_up : 4.2000000000000000e+01 : : : notype :\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
