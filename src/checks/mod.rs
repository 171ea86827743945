//! Email-authentication record checks.
//!
//! Each check builds a query name, fetches its TXT records, and looks for the
//! record type's version marker:
//!
//! | Check | Query name                          | Marker     |
//! |-------|-------------------------------------|------------|
//! | DMARC | `_dmarc.<domain>`                   | `v=DMARC1` |
//! | SPF   | `<domain>`                          | `v=spf1`   |
//! | DKIM  | `<selector>._domainkey.<domain>`    | `v=DKIM1`  |
//!
//! Checks never return an error: a lookup failure becomes
//! `CheckOutcome::Failed`, and "no answer" from the resolver is reported the
//! same way as records that lack the marker.

mod policy;
mod record;
mod report;

use std::io::{self, Write};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::{DKIM_MARKER, DMARC_MARKER, SPF_MARKER};
use crate::dns::TxtResolver;

// Re-export public API
pub use policy::DmarcPolicy;
pub use record::{check_dkim, check_dmarc, check_spf};
pub use report::render_outcome;

/// The three record types this crate checks, declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CheckKind {
    /// DMARC policy record
    Dmarc,
    /// SPF sender policy
    Spf,
    /// DKIM public key
    Dkim,
}

impl CheckKind {
    /// The version tag identifying this record type.
    pub fn marker(self) -> &'static str {
        match self {
            CheckKind::Dmarc => DMARC_MARKER,
            CheckKind::Spf => SPF_MARKER,
            CheckKind::Dkim => DKIM_MARKER,
        }
    }
}

/// Result of a single record check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A record with the expected marker was found.
    Found {
        /// The record text, quotes stripped.
        record: String,
        /// Policy classification; only set for DMARC.
        policy: Option<DmarcPolicy>,
    },
    /// No record carried the marker, or the resolver had no answer.
    NotFound,
    /// The lookup itself failed.
    Failed(String),
}

impl CheckOutcome {
    /// `true` only for `Found`.
    pub fn is_found(&self) -> bool {
        matches!(self, CheckOutcome::Found { .. })
    }
}

impl From<CheckOutcome> for bool {
    fn from(outcome: CheckOutcome) -> Self {
        outcome.is_found()
    }
}

/// Runs the DMARC, SPF and DKIM checks for `domain`, in that order, writing
/// each outcome to `out` as soon as it is known.
///
/// The checks are independent: a failure in one does not skip the others, and
/// no combined verdict is produced. DKIM uses the default selector.
///
/// # Errors
///
/// Only errors writing to `out` are returned.
pub async fn run_all_checks<R, W>(
    resolver: &R,
    domain: &str,
    out: &mut W,
) -> io::Result<Vec<(CheckKind, CheckOutcome)>>
where
    R: TxtResolver,
    W: Write,
{
    let mut results = Vec::with_capacity(3);

    for kind in CheckKind::iter() {
        let outcome = match kind {
            CheckKind::Dmarc => check_dmarc(resolver, domain).await,
            CheckKind::Spf => check_spf(resolver, domain).await,
            CheckKind::Dkim => check_dkim(resolver, domain, None).await,
        };
        render_outcome(out, kind, domain, &outcome)?;
        results.push((kind, outcome));
    }

    out.flush()?;
    Ok(results)
}
