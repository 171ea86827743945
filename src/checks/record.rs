//! DMARC, SPF and DKIM lookups.

use log::debug;

use super::{CheckKind, CheckOutcome, DmarcPolicy};
use crate::dns::{dkim_query_name, dmarc_query_name, find_record, TxtResolver};
use crate::error_handling::DnsError;

/// Checks the DMARC record at `_dmarc.<domain>` and classifies its policy.
pub async fn check_dmarc<R: TxtResolver>(resolver: &R, domain: &str) -> CheckOutcome {
    let name = dmarc_query_name(domain);
    match lookup_marker(resolver, CheckKind::Dmarc, &name).await {
        CheckOutcome::Found { record, .. } => {
            let policy = DmarcPolicy::classify(&record);
            debug!("DMARC policy for {domain}: {policy}");
            CheckOutcome::Found {
                record,
                policy: Some(policy),
            }
        }
        other => other,
    }
}

/// Checks the SPF record among the TXT records at `domain` itself.
pub async fn check_spf<R: TxtResolver>(resolver: &R, domain: &str) -> CheckOutcome {
    lookup_marker(resolver, CheckKind::Spf, domain).await
}

/// Checks the DKIM key at `<selector>._domainkey.<domain>`.
///
/// `None` uses the `default` selector, which is only a guess: real selectors
/// are chosen by the mail provider and must be known out-of-band.
pub async fn check_dkim<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    selector: Option<&str>,
) -> CheckOutcome {
    let name = dkim_query_name(domain, selector);
    lookup_marker(resolver, CheckKind::Dkim, &name).await
}

/// Queries `name` and returns the first record carrying `kind`'s marker.
async fn lookup_marker<R: TxtResolver>(resolver: &R, kind: CheckKind, name: &str) -> CheckOutcome {
    debug!("Querying TXT records at {name} for {kind}");
    match resolver.lookup_txt(name).await {
        Ok(records) => match find_record(&records, kind.marker()) {
            Some(record) => CheckOutcome::Found {
                record,
                policy: None,
            },
            None => {
                debug!(
                    "{} TXT record(s) at {name}, none with {}",
                    records.len(),
                    kind.marker()
                );
                CheckOutcome::NotFound
            }
        },
        Err(DnsError::NoAnswer { .. }) => CheckOutcome::NotFound,
        Err(e @ DnsError::Resolution { .. }) => {
            log::warn!("{kind} check failed for {name}: {e}");
            CheckOutcome::Failed(e.to_string())
        }
    }
}
