//! `csvpart split` handler.

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::info;

use csvpart::cli::SplitArgs;
use csvpart::files::size::format_file_size;
use csvpart::files::writer;
use csvpart::limiter::{format_remaining_time, RateLimiter};
use csvpart::splitter;
use csvpart::Config;

use super::{open_store, prompt_confirmation, read_document, resolve_options};

#[derive(Serialize)]
struct PartSummary<'a> {
    name: &'a str,
    size: usize,
}

#[derive(Serialize)]
struct SplitSummary<'a> {
    total_rows: usize,
    header_row: Option<&'a str>,
    output_dir: String,
    files: Vec<PartSummary<'a>>,
}

/// Run the full split pipeline: analyze, gate, partition, persist, record.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: SplitArgs) -> Result<()> {
    let config = Config::load()?;
    let options = resolve_options(args.rows_per_file, args.preset, args.no_header, &config);

    let content = read_document(&args.file)?;

    // Gate before any work; a failed split must not consume the cooldown
    let mut limiter = RateLimiter::new(open_store()?);
    let status = limiter.check()?;
    if !status.allowed {
        bail!(
            "Rate limit active: next split available in {}",
            format_remaining_time(status.remaining_ms)
        );
    }

    let result = splitter::split(&content, &options)?;

    let output_dir = args
        .output_dir
        .or_else(|| config.output.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let existing = writer::existing_files(&output_dir, &result.files);
    if !existing.is_empty() && !args.yes {
        let message = format!(
            "{} part(s) already exist in {}. Overwrite?",
            existing.len(),
            output_dir.display()
        );
        if !prompt_confirmation(&message)? {
            println!("Aborted, no files written.");
            return Ok(());
        }
    }

    let written = writer::write_all(&output_dir, &result.files)?;

    // Only a fully persisted split consumes the cooldown
    limiter.record()?;
    info!(parts = written.len(), "split complete");

    if args.json {
        let summary = SplitSummary {
            total_rows: result.total_rows,
            header_row: result.header_row.as_deref(),
            output_dir: output_dir.display().to_string(),
            files: result
                .files
                .iter()
                .map(|f| PartSummary {
                    name: &f.name,
                    size: f.size,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Split {} into {} part(s) in {}:",
            args.file.display(),
            result.files.len(),
            output_dir.display()
        );
        for file in &result.files {
            println!("  {}  ({})", file.name, format_file_size(file.size as u64));
        }
        let total_bytes: usize = result.files.iter().map(|f| f.size).sum();
        println!(
            "{} source row(s), {} written",
            result.total_rows,
            format_file_size(total_bytes as u64)
        );
    }

    Ok(())
}
