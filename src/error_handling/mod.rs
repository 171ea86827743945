//! Error handling.
//!
//! This module provides the error types used across the crate:
//! - **Initialization errors**: logger setup failures, fatal at startup
//! - **DNS errors**: lookup failures, which the record checks turn into outcomes
//!   and never let escape

mod types;

// Re-export public API
pub use types::{DnsError, InitializationError};
