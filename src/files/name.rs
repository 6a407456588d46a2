//! Naming for generated output files.
//!
//! Parts follow the fixed pattern `part_<i>_of_<N>.csv`, 1-based, so a file
//! can be identified without opening it even after the set is moved around.

/// Extension shared by every generated part.
pub const OUTPUT_EXTENSION: &str = "csv";

/// Builds the name for one part of a split.
///
/// `part` is 1-based; `total_parts` is the size of the whole partition.
pub fn part_file_name(part: usize, total_parts: usize) -> String {
    format!("part_{}_of_{}.{}", part, total_parts, OUTPUT_EXTENSION)
}
