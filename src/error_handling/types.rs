//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Outcome of a failed TXT lookup.
///
/// `NoAnswer` covers both a name that does not exist and a name with no TXT
/// records. Every other resolver failure is a `Resolution` error carrying the
/// resolver's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// NXDOMAIN or NODATA for the queried name.
    #[error("no TXT records found for {name}")]
    NoAnswer {
        /// The queried name.
        name: String,
    },

    /// Timeout, SERVFAIL, malformed name, network error and the like.
    #[error("{message}")]
    Resolution {
        /// The queried name.
        name: String,
        /// The resolver's error message.
        message: String,
    },
}

impl DnsError {
    /// Returns the name that was being queried.
    pub fn name(&self) -> &str {
        match self {
            DnsError::NoAnswer { name } | DnsError::Resolution { name, .. } => name,
        }
    }
}
