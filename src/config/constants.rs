//! Configuration constants.
//!
//! Query labels, record version markers and resolver settings used by the
//! record checks.

/// Label prepended to a domain to find its DMARC record.
pub const DMARC_LABEL: &str = "_dmarc";

/// Label placed between the selector and the domain for DKIM keys.
pub const DKIM_LABEL: &str = "_domainkey";

/// DKIM selector used when the caller does not name one.
///
/// This is a guess. Real selectors are chosen by the sending provider and
/// cannot be discovered through DNS, so most domains report "not found" here.
pub const DEFAULT_DKIM_SELECTOR: &str = "default";

/// Version tag identifying a DMARC record.
pub const DMARC_MARKER: &str = "v=DMARC1";
/// Version tag identifying an SPF record.
pub const SPF_MARKER: &str = "v=spf1";
/// Version tag identifying a DKIM key record.
pub const DKIM_MARKER: &str = "v=DKIM1";

/// Resolver attempts per query. A single attempt: queries are never retried.
pub const RESOLVER_ATTEMPTS: usize = 1;

/// Resolver cache size. Zero keeps every menu round a fresh lookup.
pub const RESOLVER_CACHE_SIZE: usize = 0;
