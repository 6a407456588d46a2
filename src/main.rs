//! csvpart binary entry point.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use csvpart::cli::{Cli, Commands, ConfigAction};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Split(args) => commands::split::handle(args),
        Commands::Analyze(args) => commands::analyze::handle(args),
        Commands::Cooldown { action } => commands::cooldown::handle(action),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "csvpart", &mut std::io::stdout());
            Ok(())
        }
    }
}
