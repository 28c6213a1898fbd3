//! Application constants for the gSTORE organizer
//!
//! This module contains format markers, default file names, and numeric
//! formatting parameters shared across the library.

// =============================================================================
// Flat-Format (gSTORE-4) Constants
// =============================================================================

/// Signature emitted on the first line of every reconstructed flat file
pub const GSTORE_SIGNATURE: &str = "#!gSTORE-4";

/// Number of colon-delimited fields in a flat-format record line
pub const FLAT_FIELD_COUNT: usize = 6;

/// Separator between fields in a flat-format record line
pub const FIELD_SEPARATOR: &str = " : ";

/// Column legend comment emitted under the `!Variables` section marker
pub const COLUMN_LEGEND: &str = "# PathName : Value : LowerBound : UpperBound : Type : Units";

/// Timestamp format used in the flat-file creation header
pub const HEADER_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// File extension used when discovering flat result files in batch mode
pub const FLAT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Container Table Constants
// =============================================================================

/// Fixed table file name written into every container directory
pub const TABLE_FILE_NAME: &str = "variables.csv";

/// Number of columns in a container table row
pub const TABLE_COLUMN_COUNT: usize = 6;

// =============================================================================
// Numeric Formatting
// =============================================================================

/// Mantissa digits used when rendering numeric fields in scientific notation
pub const MANTISSA_DIGITS: usize = 16;

// =============================================================================
// Output Defaults
// =============================================================================

/// Default directory name for an organized hierarchy next to its input file
pub const DEFAULT_ORGANIZED_DIR_NAME: &str = "organized_output";

/// Default file name for a reconstructed flat file
pub const DEFAULT_RECONSTRUCTED_FILE_NAME: &str = "reconstructed.txt";

/// Default process name written into the reconstructed flat-file header
pub const DEFAULT_PROCESS_NAME: &str = "reconstructed_process";

/// Check if a path looks like a flat result file
pub fn is_flat_file(path: &std::path::Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == FLAT_FILE_EXTENSION)
}
