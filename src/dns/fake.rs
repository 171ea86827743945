//! In-memory resolver for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::TxtResolver;
use crate::error_handling::DnsError;

/// Answers TXT lookups from a fixed table and remembers every queried name.
///
/// Names missing from the table get `DnsError::NoAnswer`.
#[derive(Default)]
pub(crate) struct FakeResolver {
    answers: HashMap<String, Result<Vec<String>, DnsError>>,
    queried: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub(crate) fn with_records(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub(crate) fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.answers.insert(
            name.to_string(),
            Err(DnsError::Resolution {
                name: name.to_string(),
                message: message.to_string(),
            }),
        );
        self
    }

    pub(crate) fn queried(&self) -> Vec<String> {
        self.queried.lock().expect("lock").clone()
    }
}

impl TxtResolver for FakeResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.queried.lock().expect("lock").push(name.to_string());
        self.answers.get(name).cloned().unwrap_or_else(|| {
            Err(DnsError::NoAnswer {
                name: name.to_string(),
            })
        })
    }
}
