//! wg-kit: small WireGuard helpers
//!
//! Merges a directory of WireGuard client configs into one multi-peer config
//! and looks up the IPv6 addresses of VPN endpoints.

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod scan;
pub mod utils;
pub mod wgconf;

pub use error::{Result, WgError};
