//! Command-line interface for wg-kit
//!
//! Provides `merge` and `resolve` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;
mod resolve;

/// Merge WireGuard peer configs and look up IPv6 endpoints
#[derive(Parser)]
#[command(name = "wg-kit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a directory of WireGuard configs into one file
    Merge(merge::MergeArgs),

    /// Print the IPv6 (AAAA) addresses of a host
    Resolve(resolve::ResolveArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise --verbose selects DEBUG over the WARN default.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Resolve(args) => resolve::run(args),
    }
}
