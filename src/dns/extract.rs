//! Query-name construction and TXT record extraction.
//!
//! Record matching is a plain substring test on the version marker, with no
//! tag=value parsing.

use crate::config::{DEFAULT_DKIM_SELECTOR, DKIM_LABEL, DMARC_LABEL};

/// Builds the DMARC query name, `_dmarc.<domain>`.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// Builds the DKIM query name, `<selector>._domainkey.<domain>`.
///
/// Falls back to the `default` selector when none is given.
pub fn dkim_query_name(domain: &str, selector: Option<&str>) -> String {
    let selector = selector.unwrap_or(DEFAULT_DKIM_SELECTOR);
    format!("{selector}.{DKIM_LABEL}.{domain}")
}

/// Strips surrounding quote characters from a TXT record value.
///
/// Some resolvers hand back presentation-format text (`"v=spf1 -all"`); the
/// quotes are not part of the record.
pub fn normalize_txt(record: &str) -> &str {
    record.trim_matches('"')
}

/// Finds the first TXT record containing `marker`.
///
/// Every record is scanned: the record holding the marker is not necessarily
/// the first one returned, since unrelated TXT records share the name.
///
/// # Returns
///
/// The normalized text of the first matching record, or `None`.
pub fn find_record(txt_records: &[String], marker: &str) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| normalize_txt(txt))
        .find(|txt| txt.contains(marker))
        .map(str::to_string)
}
