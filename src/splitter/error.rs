//! Split operation errors.

/// Errors that can occur while partitioning a CSV document.
///
/// Both variants abort the split before any output file is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The document has no non-blank lines at all.
    #[error("The CSV file is empty")]
    EmptyDocument,

    /// The header consumed all content; there is nothing left to partition.
    #[error("The file contains no data rows (only a header)")]
    NoDataRows,
}
