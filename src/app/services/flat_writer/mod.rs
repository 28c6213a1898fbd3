//! Flat-format writer for gSTORE-4 result files
//!
//! Serializes an ordered list of variable records back into the flat
//! colon-delimited format, including the gSTORE-4 envelope (creation
//! header, process name, time section, variable count, column legend).
//! Output is byte-identical across runs for the same input order.

pub mod ordering;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use ordering::OutputOrder;
pub use writer::{FlatFileWriter, render_record};
