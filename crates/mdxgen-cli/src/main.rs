//! mdxgen CLI - migrate markdown blog content
//!
//! This is the main entry point for the mdxgen command-line interface.
//! Command implementations are organized in separate modules for better
//! maintainability and single responsibility.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli)
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn execute_command(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Mdx { input, output } => {
            commands::generate_mdx(&input, output, config)?;
        },

        Commands::Api { input, output } => {
            commands::generate_api(&input, output, config)?;
        },

        Commands::Fm { input, output } => {
            commands::normalize_front_matter(&input, output, config)?;
        },
    }

    Ok(())
}
