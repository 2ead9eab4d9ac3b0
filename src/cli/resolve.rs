//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_settings, resolve_target, CliOverrides};
use crate::dns::{host_to_ipv6, SystemResolver};

#[derive(Args)]
pub struct ResolveArgs {
    /// Host to look up [default: free-unlimited.hideservers.net]
    #[arg(value_name = "HOSTNAME")]
    pub hostname: Option<String>,

    /// Give up on the lookup after this many seconds [default: 5]
    #[arg(short, long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to settings file (wg-kit.toml or wg-kit.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let settings = load_settings(&cwd, args.config.as_deref())?;

    let overrides = CliOverrides {
        hostname: args.hostname,
        timeout_secs: args.timeout_secs,
        ..CliOverrides::default()
    };
    let (hostname, timeout) = resolve_target(&settings, &overrides);

    let resolver = SystemResolver::new(timeout)?;
    println!("{}", host_to_ipv6(&resolver, &hostname));

    Ok(())
}
