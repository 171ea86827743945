//! TXT record queries over `hickory-resolver`.

use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::TxtResolver;
use crate::error_handling::DnsError;

/// `TxtResolver` backed by a hickory async resolver.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryTxtResolver {
    /// Wraps an already configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            // TXT records can contain multiple strings - join them
                            Some(
                                txt.iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect();
                log::debug!("{} TXT record(s) for {name}", txt_records.len());
                Ok(txt_records)
            }
            Err(e) => Err(classify_error(name, &e)),
        }
    }
}

/// Maps a hickory error onto `DnsError`.
///
/// hickory reports every negative response as `NoRecordsFound`. Only NXDOMAIN
/// and NOERROR (a name without TXT records) mean "no answer"; SERVFAIL,
/// REFUSED and the other response codes are resolution failures.
fn classify_error(name: &str, e: &ResolveError) -> DnsError {
    let message = match e.kind() {
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NXDomain | ResponseCode::NoError,
            ..
        } => {
            log::debug!("No TXT records for {name}: {e}");
            return DnsError::NoAnswer {
                name: name.to_string(),
            };
        }
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            format!("{response_code} for {name}")
        }
        _ => e.to_string(),
    };

    if message.contains("timeout") || message.contains("timed out") {
        log::warn!("TXT record lookup timed out for {name}: {e}");
    } else {
        log::warn!("Failed to lookup TXT records for {name}: {message}");
    }
    DnsError::Resolution {
        name: name.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::op::Query;

    fn negative_response(response_code: ResponseCode) -> ResolveError {
        ResolveError::from(ResolveErrorKind::NoRecordsFound {
            query: Box::new(Query::default()),
            soa: None,
            negative_ttl: None,
            response_code,
            trusted: false,
        })
    }

    #[test]
    fn test_nxdomain_is_no_answer() {
        let err = negative_response(ResponseCode::NXDomain);
        assert_eq!(
            classify_error("_dmarc.nodmarc.test", &err),
            DnsError::NoAnswer {
                name: "_dmarc.nodmarc.test".to_string()
            }
        );
    }

    #[test]
    fn test_nodata_is_no_answer() {
        let err = negative_response(ResponseCode::NoError);
        assert!(matches!(
            classify_error("example.com", &err),
            DnsError::NoAnswer { .. }
        ));
    }

    #[test]
    fn test_servfail_is_resolution_failure() {
        let err = negative_response(ResponseCode::ServFail);
        match classify_error("_dmarc.example.com", &err) {
            DnsError::Resolution { name, message } => {
                assert_eq!(name, "_dmarc.example.com");
                assert_eq!(message, "Server Failure for _dmarc.example.com");
            }
            other => panic!("SERVFAIL should be a resolution failure, got {other:?}"),
        }
    }

    #[test]
    fn test_refused_is_resolution_failure() {
        let err = negative_response(ResponseCode::Refused);
        assert!(matches!(
            classify_error("example.com", &err),
            DnsError::Resolution { .. }
        ));
    }

    #[test]
    fn test_message_error_is_resolution_failure() {
        let err = ResolveError::from(ResolveErrorKind::Message("placeholder"));
        // A message error is a resolution failure, not an empty answer
        assert!(matches!(
            classify_error("example.com", &err),
            DnsError::Resolution { .. }
        ));
    }

    #[test]
    fn test_resolution_failure_keeps_message() {
        let err = ResolveError::from(ResolveErrorKind::Msg("server failure".to_string()));
        match classify_error("_dmarc.example.com", &err) {
            DnsError::Resolution { name, message } => {
                assert_eq!(name, "_dmarc.example.com");
                assert!(message.contains("server failure"));
            }
            other => panic!("expected a resolution failure, got {other:?}"),
        }
    }
}
