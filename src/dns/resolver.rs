//! hickory-backed AAAA resolver

use std::net::Ipv6Addr;
use std::time::Duration;

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tokio::runtime::Runtime;

use super::{Ipv6Resolver, LookupError};
use crate::error::{Result, WgError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolver using the host's DNS configuration.
///
/// Owns a current-thread runtime so callers can stay synchronous.
pub struct SystemResolver {
    runtime: Runtime,
    resolver: TokioResolver,
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WgError::Runtime)?;

        let resolver = {
            let _guard = runtime.enter();
            // Try system config, fall back to defaults
            TokioResolver::builder_tokio().map(|b| b.build()).unwrap_or_else(|e| {
                tracing::debug!("system resolver config unavailable ({}), using defaults", e);
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            })
        };

        Ok(Self { runtime, resolver, timeout })
    }
}

impl Ipv6Resolver for SystemResolver {
    fn lookup_aaaa(&self, host: &str) -> std::result::Result<Vec<Ipv6Addr>, LookupError> {
        let answer = self
            .runtime
            .block_on(tokio::time::timeout(self.timeout, self.resolver.ipv6_lookup(host)));

        match answer {
            Err(_) => Err(LookupError::Failed(format!(
                "timed out after {}s",
                self.timeout.as_secs_f32()
            ))),
            Ok(Err(e)) if e.is_no_records_found() => Err(LookupError::NoRecords),
            Ok(Err(e)) => Err(LookupError::Failed(e.to_string())),
            Ok(Ok(records)) => Ok(records.iter().map(|aaaa| aaaa.0).collect()),
        }
    }
}
