use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotup")]
#[command(author, version, about, long_about = None)]
#[command(about = "A thin orchestrator for workstation bootstrap across macOS and Fedora")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to package manifest (packages.json)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install every missing package from the manifest
    Apply {
        /// Only show what would be done, don't make changes
        #[arg(long)]
        dry_run: bool,

        /// Include work-only packages
        #[arg(long)]
        work: bool,

        /// Treat this host as macOS regardless of detection
        #[arg(long)]
        force_macos: bool,
    },

    /// Show how manifest entries resolve on this platform
    List {
        /// Only show entries with this name
        name: Option<String>,

        /// Include work-only packages
        #[arg(long)]
        work: bool,

        /// Treat this host as macOS regardless of detection
        #[arg(long)]
        force_macos: bool,
    },
}
