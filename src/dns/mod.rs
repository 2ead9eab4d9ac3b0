//! IPv6 address lookup for VPN endpoints
//!
//! The lookup distinguishes a name that simply has no AAAA records from a
//! resolution that failed outright. Callers that only care whether addresses
//! came back can use [`Ipv6Lookup::addresses`].

pub mod resolver;

use std::fmt;
use std::net::Ipv6Addr;
use thiserror::Error;

pub use resolver::{SystemResolver, DEFAULT_TIMEOUT};

pub const DEFAULT_HOSTNAME: &str = "free-unlimited.hideservers.net";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no AAAA records")]
    NoRecords,
    #[error("{0}")]
    Failed(String),
}

/// Source of AAAA answers.
pub trait Ipv6Resolver {
    fn lookup_aaaa(&self, host: &str) -> Result<Vec<Ipv6Addr>, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ipv6Lookup {
    Found(Vec<Ipv6Addr>),
    NoRecords,
    Failed(String),
}

impl Ipv6Lookup {
    /// Addresses when at least one was found.
    pub fn addresses(&self) -> Option<&[Ipv6Addr]> {
        match self {
            Ipv6Lookup::Found(addrs) => Some(addrs),
            _ => None,
        }
    }
}

/// Prints `['addr', ...]` when addresses were found and `False` otherwise.
impl fmt::Display for Ipv6Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(addrs) = self.addresses() else {
            return f.write_str("False");
        };
        f.write_str("[")?;
        for (i, addr) in addrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{addr}'")?;
        }
        f.write_str("]")
    }
}

/// Resolve the IPv6 addresses of `host`.
pub fn host_to_ipv6(resolver: &dyn Ipv6Resolver, host: &str) -> Ipv6Lookup {
    match resolver.lookup_aaaa(host) {
        Ok(addrs) if addrs.is_empty() => Ipv6Lookup::NoRecords,
        Ok(addrs) => {
            tracing::debug!("{} has {} AAAA record(s)", host, addrs.len());
            Ipv6Lookup::Found(addrs)
        }
        Err(LookupError::NoRecords) => Ipv6Lookup::NoRecords,
        Err(LookupError::Failed(reason)) => {
            tracing::warn!("AAAA lookup for {} failed: {}", host, reason);
            Ipv6Lookup::Failed(reason)
        }
    }
}
