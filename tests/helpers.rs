// Shared test helpers: an in-memory resolver and a scripted shell runner.
//
// This module is included with `mod helpers;` by the test files that need it.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use mailauth_check::{run_shell, DnsError, ShellReport, TxtResolver};

/// Resolver answering from a fixed table; unknown names get `NoAnswer`.
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, Result<Vec<String>, DnsError>>,
    queried: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn failure(mut self, name: &str, message: &str) -> Self {
        self.answers.insert(
            name.to_string(),
            Err(DnsError::Resolution {
                name: name.to_string(),
                message: message.to_string(),
            }),
        );
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().expect("lock").clone()
    }
}

impl TxtResolver for StaticResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.queried.lock().expect("lock").push(name.to_string());
        self.answers.get(name).cloned().unwrap_or_else(|| {
            Err(DnsError::NoAnswer {
                name: name.to_string(),
            })
        })
    }
}

/// Runs the shell over `script` and returns its report and everything it printed.
#[allow(dead_code)]
pub async fn run_script(resolver: &StaticResolver, script: &str) -> (ShellReport, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let report = run_shell(resolver, &mut input, &mut out)
        .await
        .expect("shell should not fail on in-memory I/O");
    (report, String::from_utf8(out).expect("utf-8 output"))
}
