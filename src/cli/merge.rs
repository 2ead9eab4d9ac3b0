//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_settings, merge_options, CliOverrides};
use crate::wgconf::{merge_directory, MergeOutcome};

#[derive(Args)]
pub struct MergeArgs {
    /// Directory holding the configs to merge [default: configs]
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Merged config to write (overwritten) [default: merged_wg.conf]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// File-name glob selecting configs [default: *.conf]
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Path to settings file (wg-kit.toml or wg-kit.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let settings = load_settings(&cwd, args.config.as_deref())?;

    let overrides = CliOverrides {
        input_dir: args.input_dir,
        output: args.output,
        pattern: args.pattern,
        ..CliOverrides::default()
    };
    let opts = merge_options(&settings, &overrides);

    let outcome = merge_directory(&opts)
        .with_context(|| format!("Failed to merge configs from {}", opts.input_dir.display()))?;

    match outcome {
        MergeOutcome::NoInputs => {
            println!("No WireGuard configuration files found in {}", opts.input_dir.display());
        }
        MergeOutcome::Merged(summary) => {
            println!("Merged {} config file(s) into {}", summary.files, summary.output.display());
            println!("Contains {} Interface and {} Peer section(s)", summary.interfaces, summary.peers);
        }
    }

    Ok(())
}
