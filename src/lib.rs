//! mailauth_check library: DMARC, SPF and DKIM record lookups
//!
//! This library looks up a domain's email-authentication TXT records, checks
//! them for their version markers, and reports what it finds. It backs an
//! interactive menu-driven checker, but the checks and the shell loop are both
//! usable on their own with any `TxtResolver` and any input/output streams.
//!
//! # Example
//!
//! ```no_run
//! use mailauth_check::checks::check_dmarc;
//! use mailauth_check::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver();
//! let outcome = check_dmarc(&resolver, "example.com").await;
//! println!("DMARC found: {}", outcome.is_found());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups run on a Tokio runtime. Use `#[tokio::main]` in your application
//! or call library functions from within an async context.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod shell;

// Re-export public API
pub use checks::{CheckKind, CheckOutcome, DmarcPolicy};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{HickoryTxtResolver, TxtResolver};
pub use error_handling::{DnsError, InitializationError};
pub use shell::{run_shell, LineReader, ShellReport};
