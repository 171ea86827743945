//! DNS TXT lookups.
//!
//! This module provides the resolver seam used by the record checks:
//! - `TxtResolver`, the lookup capability the checks depend on
//! - `HickoryTxtResolver`, the production implementation on `hickory-resolver`
//! - Query-name construction and TXT text normalization
//!
//! A lookup either yields zero or more record strings, a `DnsError::NoAnswer`
//! (NXDOMAIN or NODATA), or a `DnsError::Resolution` carrying the resolver's
//! message.

mod extract;
mod records;

use std::future::Future;

use crate::error_handling::DnsError;

// Re-export public API
pub use extract::{dkim_query_name, dmarc_query_name, find_record, normalize_txt};
pub use records::HickoryTxtResolver;

/// A DNS client able to fetch TXT records for a name.
///
/// Implementations return records in the order the resolver produced them.
pub trait TxtResolver {
    /// Looks up the TXT records at `name`.
    fn lookup_txt(&self, name: &str) -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

#[cfg(test)]
pub(crate) mod fake;
