//! Command-line interface definitions.
//!
//! Lives in the library so the xtask man page and completion generators see
//! the same definitions as the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Quick-pick presets for rows per output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    #[value(name = "500")]
    Rows500,
    #[value(name = "1000")]
    Rows1000,
    #[value(name = "5000")]
    Rows5000,
    #[value(name = "10000")]
    Rows10000,
}

impl Preset {
    /// Data rows per output file for this preset.
    pub fn rows_per_file(self) -> usize {
        match self {
            Preset::Rows500 => 500,
            Preset::Rows1000 => 1000,
            Preset::Rows5000 => 5000,
            Preset::Rows10000 => 10_000,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "csvpart",
    about = "Split CSV files into smaller parts with a shared header",
    version = crate::build_version()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a CSV file into parts
    Split(SplitArgs),
    /// Inspect a CSV file without splitting it
    Analyze(AnalyzeArgs),
    /// Show or reset the conversion cooldown
    Cooldown {
        #[command(subcommand)]
        action: CooldownAction,
    },
    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// CSV file to split
    pub file: PathBuf,

    /// Maximum data rows per output file
    #[arg(short = 'r', long, conflicts_with = "preset")]
    pub rows_per_file: Option<usize>,

    /// Quick-pick preset for rows per file
    #[arg(short = 'p', long, value_enum)]
    pub preset: Option<Preset>,

    /// Do not treat the first line as a header
    #[arg(long)]
    pub no_header: bool,

    /// Directory the parts are written to
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing parts without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the result summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// CSV file to inspect
    pub file: PathBuf,

    /// Rows per output file, used for the part estimate
    #[arg(short = 'r', long, conflicts_with = "preset")]
    pub rows_per_file: Option<usize>,

    /// Quick-pick preset for rows per file
    #[arg(short = 'p', long, value_enum)]
    pub preset: Option<Preset>,

    /// Do not treat the first line as a header
    #[arg(long)]
    pub no_header: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CooldownAction {
    /// Show whether a new split is currently allowed
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear the recorded conversion timestamp
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}
