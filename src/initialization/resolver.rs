//! DNS resolver initialization.
//!
//! This module builds the hickory resolver used for every TXT lookup.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{RESOLVER_ATTEMPTS, RESOLVER_CACHE_SIZE};
use crate::dns::HickoryTxtResolver;

/// Initializes the DNS resolver for TXT lookups.
///
/// Nameservers and the per-query timeout come from the system configuration
/// (`/etc/resolv.conf` or the platform equivalent). If it cannot be read or
/// lists no nameservers, the built-in default configuration (Google public
/// DNS) is used instead.
///
/// Queries are made once, without retries, and answers are not cached.
pub fn init_resolver() -> HickoryTxtResolver {
    let (resolver_config, opts) = resolver_parts();

    log::debug!(
        "DNS resolver using {} nameserver(s), timeout {:?}",
        resolver_config.name_servers().len(),
        opts.timeout
    );

    HickoryTxtResolver::new(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}

fn resolver_parts() -> (ResolverConfig, ResolverOpts) {
    let (resolver_config, mut opts) = match read_system_conf() {
        Ok((system_config, system_opts)) if !system_config.name_servers().is_empty() => {
            (system_config, system_opts)
        }
        Ok(_) => {
            log::warn!("System resolver configuration lists no nameservers, using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
        Err(e) => {
            log::warn!("Failed to read system resolver configuration ({e}), using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.attempts = RESOLVER_ATTEMPTS;
    opts.cache_size = RESOLVER_CACHE_SIZE;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    (resolver_config, opts)
}
