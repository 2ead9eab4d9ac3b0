//! wg-kit: merge WireGuard configs and look up IPv6 endpoints

use anyhow::Result;

fn main() -> Result<()> {
    wg_kit::cli::run()
}
