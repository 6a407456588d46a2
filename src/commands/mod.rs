//! Subcommand handlers for the csvpart binary.

pub mod analyze;
pub mod config;
pub mod cooldown;
pub mod split;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::warn;

use csvpart::cli::Preset;
use csvpart::limiter::{FileStore, STORAGE_KEY};
use csvpart::splitter::SplitOptions;
use csvpart::Config;

/// Practical input ceiling. Larger files still split, with a warning.
pub(crate) const ADVISORY_MAX_BYTES: u64 = 8 * 1024 * 1024;

/// Overrides the rate limit state location, for tests and sandboxed runs.
const STATE_DIR_ENV: &str = "CSVPART_STATE_DIR";

/// Opens the rate limit state store.
pub(crate) fn open_store() -> Result<FileStore> {
    if let Ok(dir) = env::var(STATE_DIR_ENV) {
        return Ok(FileStore::at(PathBuf::from(dir).join(STORAGE_KEY)));
    }
    Ok(FileStore::open_default()?)
}

/// Resolves split options from flags, falling back to config defaults.
pub(crate) fn resolve_options(
    rows_per_file: Option<usize>,
    preset: Option<Preset>,
    no_header: bool,
    config: &Config,
) -> SplitOptions {
    let rows = rows_per_file
        .or_else(|| preset.map(Preset::rows_per_file))
        .unwrap_or(config.split.rows_per_file);
    let include_header = if no_header {
        false
    } else {
        config.split.include_header
    };
    SplitOptions::new(rows, include_header)
}

/// Reads the input document, enforcing the `.csv` extension.
pub(crate) fn read_document(path: &Path) -> Result<String> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        bail!("Only .csv files are supported: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if content.len() as u64 > ADVISORY_MAX_BYTES {
        warn!(
            size = content.len(),
            "input exceeds the 8 MB advisory ceiling"
        );
    }

    Ok(content)
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
pub(crate) fn prompt_confirmation(message: &str) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to overwrite existing parts");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
