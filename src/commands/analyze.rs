//! `csvpart analyze` handler.

use anyhow::Result;
use serde::Serialize;

use csvpart::analyzer;
use csvpart::cli::AnalyzeArgs;
use csvpart::files::size::format_file_size;
use csvpart::splitter;
use csvpart::Config;

use super::{read_document, resolve_options};

#[derive(Serialize)]
struct AnalyzeSummary<'a> {
    total_rows: usize,
    has_header: bool,
    preview: &'a [String],
    size_bytes: usize,
    rows_per_file: usize,
    estimated_files: usize,
}

/// Inspect a document and show what a split would produce.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: AnalyzeArgs) -> Result<()> {
    let config = Config::load()?;
    let options = resolve_options(args.rows_per_file, args.preset, args.no_header, &config);

    let content = read_document(&args.file)?;
    let analysis = analyzer::analyze(&content);
    let estimated = splitter::estimate_file_count(analysis.total_rows, &options);

    if args.json {
        let summary = AnalyzeSummary {
            total_rows: analysis.total_rows,
            has_header: analysis.has_header,
            preview: &analysis.preview,
            size_bytes: content.len(),
            rows_per_file: options.rows_per_file,
            estimated_files: estimated,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", args.file.display());
        println!("  Size:            {}", format_file_size(content.len() as u64));
        println!("  Rows:            {}", analysis.total_rows);
        println!(
            "  Estimated parts: {} ({} rows per file)",
            estimated, options.rows_per_file
        );
        if !analysis.preview.is_empty() {
            println!("  Preview:");
            for line in &analysis.preview {
                println!("    {}", line);
            }
        }
    }

    Ok(())
}
