//! Distribution tasks for csvpart: man pages and shell completions.
//!
//! Run with `cargo run -p xtask -- <task>`. Artifacts land in `target/dist`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};

use csvpart::cli::Cli as CsvpartCli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for csvpart")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page into target/dist
    Man,
    /// Generate completions for common shells into target/dist
    Completions,
}

fn dist_dir() -> Result<PathBuf> {
    let dir = PathBuf::from("target").join("dist");
    fs::create_dir_all(&dir).context("Failed to create target/dist")?;
    Ok(dir)
}

fn generate_man() -> Result<()> {
    let dir = dist_dir()?;
    let cmd = CsvpartCli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    let path = dir.join("csvpart.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn generate_completions() -> Result<()> {
    let dir = dist_dir()?;
    let mut cmd = CsvpartCli::command();

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = generate_to(shell, &mut cmd, "csvpart", &dir)
            .with_context(|| format!("Failed to generate {} completions", shell))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man => generate_man(),
        Task::Completions => generate_completions(),
    }
}
