//! csvpart - split CSV files into smaller parts.
//!
//! Library behind the `csvpart` binary. The pipeline: [`analyzer`] counts
//! rows and previews a document, [`splitter`] partitions it into parts,
//! [`limiter`] enforces the cooldown between conversions, and [`files`]
//! names, sizes, and persists the generated parts. [`cli`] holds the clap
//! definitions so the xtask generators see the same interface as the binary.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod files;
pub mod limiter;
pub mod splitter;

pub use config::Config;
pub use splitter::{OutputFile, SplitError, SplitOptions, SplitResult};

/// Version string with build metadata (git SHA in dev builds).
pub fn build_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("CSVPART_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({} {})", version, sha, date),
        None => format!("{} ({})", version, date),
    }
}
