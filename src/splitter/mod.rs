//! CSV partitioning.
//!
//! Splits a document into N parts of at most `rows_per_file` data rows each,
//! optionally repeating the header row at the top of every part. The
//! partition is a contiguous, order-preserving cover of the data rows: the
//! concatenation of all parts (headers stripped) reproduces the source data
//! rows exactly. Row counting follows the analyzer's convention, so
//! whitespace-only lines never reach an output file.

mod error;

pub use error::SplitError;

use serde::Serialize;
use tracing::debug;

use crate::analyzer;
use crate::files::name::part_file_name;

/// Smallest accepted rows-per-file value.
const MIN_ROWS_PER_FILE: usize = 1;

/// Options for one split operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Maximum data rows per output file (minimum 1). A repeated header does
    /// not count toward this limit.
    pub rows_per_file: usize,
    /// Treat the first line as a header and repeat it in every output file.
    pub include_header: bool,
}

impl SplitOptions {
    /// Creates options, clamping `rows_per_file` to at least 1.
    pub fn new(rows_per_file: usize, include_header: bool) -> Self {
        Self {
            rows_per_file: rows_per_file.max(MIN_ROWS_PER_FILE),
            include_header,
        }
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            rows_per_file: 1000,
            include_header: true,
        }
    }
}

/// One generated part: a name, its content, and the content's UTF-8 size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
    /// Byte size of `content` (UTF-8).
    pub size: usize,
}

/// Result of a successful split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    /// Generated parts in partition order (part 1..N).
    pub files: Vec<OutputFile>,
    /// Count of non-blank lines in the source, header included.
    pub total_rows: usize,
    /// The header line, when `include_header` was set.
    pub header_row: Option<String>,
}

/// Partitions a CSV document according to `options`.
///
/// # Errors
///
/// Returns [`SplitError::EmptyDocument`] when the document has no non-blank
/// lines, and [`SplitError::NoDataRows`] when the header consumed the only
/// line. No output is produced in either case.
pub fn split(content: &str, options: &SplitOptions) -> Result<SplitResult, SplitError> {
    let lines: Vec<&str> = analyzer::surviving_lines(content).collect();

    if lines.is_empty() {
        return Err(SplitError::EmptyDocument);
    }

    let (header_row, data_rows) = if options.include_header {
        (Some(lines[0]), &lines[1..])
    } else {
        (None, &lines[..])
    };

    if data_rows.is_empty() {
        return Err(SplitError::NoDataRows);
    }

    let rows_per_file = options.rows_per_file.max(MIN_ROWS_PER_FILE);
    let total_files = (data_rows.len() + rows_per_file - 1) / rows_per_file;

    debug!(
        total_rows = lines.len(),
        data_rows = data_rows.len(),
        rows_per_file,
        total_files,
        "splitting document"
    );

    let mut files = Vec::with_capacity(total_files);
    for i in 0..total_files {
        let start = i * rows_per_file;
        let end = (start + rows_per_file).min(data_rows.len());

        let mut part = String::new();
        if let Some(header) = header_row {
            part.push_str(header);
            part.push('\n');
        }
        part.push_str(&data_rows[start..end].join("\n"));

        let size = part.len();
        files.push(OutputFile {
            name: part_file_name(i + 1, total_files),
            content: part,
            size,
        });
    }

    Ok(SplitResult {
        files,
        total_rows: lines.len(),
        header_row: header_row.map(str::to_owned),
    })
}

/// Number of parts a split would produce, as shown before the user commits.
///
/// `total_rows` is the analyzer's count (header included when present).
pub fn estimate_file_count(total_rows: usize, options: &SplitOptions) -> usize {
    let data_rows = total_rows.saturating_sub(options.include_header as usize);
    let rows_per_file = options.rows_per_file.max(MIN_ROWS_PER_FILE);
    (data_rows + rows_per_file - 1) / rows_per_file
}
