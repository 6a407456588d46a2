//! CSV document analysis.
//!
//! Produces the row count and preview shown to the user before a split is
//! configured. Analysis works on raw text only: a row is anything delimited
//! by `\n` that is not whitespace-only. Quoting rules are deliberately not
//! understood here, so a quoted field containing a newline counts as two
//! rows. The splitter shares this convention via [`surviving_lines`].

use serde::Serialize;

/// Number of surviving lines included in the preview.
const PREVIEW_LINES: usize = 5;

/// Basic information about a CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Count of non-blank lines, header included.
    pub total_rows: usize,
    /// Always `true`: the analyzer does not attempt header detection. The
    /// split itself takes its header policy from the user's separate toggle,
    /// which may disagree with this flag.
    pub has_header: bool,
    /// First few surviving lines, for display only.
    pub preview: Vec<String>,
}

/// Lines of `content` that survive normalization.
///
/// Splits on `\n` and discards lines that are empty after trimming. Carriage
/// returns are not stripped; a `\r\n`-terminated line keeps its `\r`.
pub fn surviving_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').filter(|line| !line.trim().is_empty())
}

/// Analyzes a CSV document.
///
/// Never fails: an empty document reports zero rows and an empty preview.
pub fn analyze(content: &str) -> Analysis {
    let mut total_rows = 0;
    let mut preview = Vec::with_capacity(PREVIEW_LINES);

    for line in surviving_lines(content) {
        total_rows += 1;
        if preview.len() < PREVIEW_LINES {
            preview.push(line.to_string());
        }
    }

    Analysis {
        total_rows,
        has_header: true,
        preview,
    }
}
