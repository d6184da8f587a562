//! MediaSearch CLI
//!
//! Inspect the learning-to-rank parameters computed for a search query.

use anyhow::Result;
use clap::Parser;
use mediasearch_core::error::exit_codes;
use mediasearch_core::{Config, MediaSearchError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<MediaSearchError>()
            .map(MediaSearchError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Features(args) => commands::features::run(args, &config, cli.format),
        Commands::Models => commands::models::run(&config, cli.format),
        Commands::Config(args) => commands::config::run(args, &config, cli.format),
    }
}
