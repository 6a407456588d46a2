//! Persists generated parts to disk.
//!
//! Parts are written strictly in partition order, one at a time. Bulk
//! persistence is a best-effort sequence, not an atomic archive: a failure
//! midway leaves the earlier parts on disk and names the part that failed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::splitter::OutputFile;

/// Errors while persisting parts.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {name}: {source}")]
    WriteFile {
        name: String,
        source: std::io::Error,
    },
}

/// Names of the parts that already exist in `dir`.
///
/// Used to warn before overwriting the results of an earlier split.
pub fn existing_files(dir: &Path, files: &[OutputFile]) -> Vec<String> {
    files
        .iter()
        .filter(|file| dir.join(&file.name).exists())
        .map(|file| file.name.clone())
        .collect()
}

/// Writes one part into `dir` under its own name.
pub fn write_file(dir: &Path, file: &OutputFile) -> Result<PathBuf, WriteError> {
    let path = dir.join(&file.name);
    fs::write(&path, &file.content).map_err(|source| WriteError::WriteFile {
        name: file.name.clone(),
        source,
    })?;
    debug!(name = %file.name, size = file.size, "wrote part");
    Ok(path)
}

/// Writes every part into `dir` in partition order.
///
/// Creates `dir` if needed and returns the written paths. A failure aborts
/// the sequence; parts written before the failure remain on disk and the
/// error names the part that failed.
pub fn write_all(dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>, WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        written.push(write_file(dir, file)?);
    }
    Ok(written)
}
