mod cli;
mod commands;
mod config;
mod error;
mod executor;
mod managers;
mod manifest;
mod platform;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging, RUST_LOG still wins over the default level
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Apply {
            dry_run,
            work,
            force_macos,
        } => {
            commands::apply::run(
                cli.config.as_deref(),
                cli.manifest.as_deref(),
                dry_run,
                work,
                force_macos,
            )?;
        }
        Command::List {
            name,
            work,
            force_macos,
        } => {
            commands::list::run(
                cli.config.as_deref(),
                cli.manifest.as_deref(),
                name.as_deref(),
                work,
                force_macos,
            )?;
        }
    }

    Ok(())
}
