//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging. Logs go
/// to stderr, so they never mix with the checker's report on stdout.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every DNS query the checker makes
/// mailauth_check --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=hickory_resolver=debug mailauth_check
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    // hickory warns about malformed/truncated UDP responses it recovers from
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("mailauth_check", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    plain_line(record.level(), record.target(), &record.args().to_string())
                )
            });
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One plain log line: glyph, colored level, message.
///
/// Records from this crate carry no target; records from dependencies
/// (hickory) are tagged with their crate name so they stand out.
fn plain_line(level: log::Level, target: &str, msg: &str) -> String {
    let (glyph, colored_level) = match level {
        log::Level::Error => ("[✗]", format!("{level:<5}").red()),
        log::Level::Warn => ("[!]", format!("{level:<5}").yellow()),
        log::Level::Info => ("[+]", format!("{level:<5}").green()),
        log::Level::Debug => ("[?]", format!("{level:<5}").blue()),
        log::Level::Trace => ("[.]", format!("{level:<5}").purple()),
    };

    match target.split("::").next() {
        Some(krate) if krate != env!("CARGO_CRATE_NAME") => {
            format!("{} {} {} {}", glyph, colored_level, krate.cyan(), msg)
        }
        _ => format!("{} {} {}", glyph, colored_level, msg),
    }
}

/// One JSON log object with the lookup name pulled out when the message has one.
fn json_line(ts_millis: i64, level: log::Level, target: &str, msg: &str) -> String {
    let mut line = serde_json::json!({
        "ts": ts_millis,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    });
    if let Some(name) = queried_name(msg) {
        line["query"] = serde_json::Value::from(name);
    }
    line.to_string()
}

// Lookup messages in this crate read "... for <name>[: detail]"
fn queried_name(msg: &str) -> Option<&str> {
    let (_, tail) = msg.split_once(" for ")?;
    let name = tail.split_whitespace().next()?.trim_end_matches(':');
    name.contains('.').then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_omits_own_target() {
        colored::control::set_override(false);
        let line = plain_line(log::Level::Warn, "mailauth_check::dns::records", "timed out");
        assert_eq!(line, "[!] WARN  timed out");
    }

    #[test]
    fn test_plain_line_tags_dependency_records() {
        colored::control::set_override(false);
        let line = plain_line(
            log::Level::Error,
            "hickory_proto::udp::udp_client_stream",
            "bad response",
        );
        assert_eq!(line, "[✗] ERROR hickory_proto bad response");
    }

    #[test]
    fn test_json_line_is_valid_json_with_query() {
        let line = json_line(
            1_700_000_000_000,
            log::Level::Debug,
            "mailauth_check::dns::records",
            "Failed to lookup TXT records for _dmarc.example.com: Server Failure",
        );
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(value["ts"], 1_700_000_000_000_i64);
        assert_eq!(value["level"], "DEBUG");
        assert_eq!(
            value["msg"],
            "Failed to lookup TXT records for _dmarc.example.com: Server Failure"
        );
        assert_eq!(value["query"], "_dmarc.example.com");
    }

    #[test]
    fn test_json_line_escapes_message() {
        let line = json_line(0, log::Level::Info, "mailauth_check", "say \"hi\"\n");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(value["msg"], "say \"hi\"\n");
        assert!(value.get("query").is_none());
    }

    #[test]
    fn test_second_init_reports_logger_error() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        // A logger is installed now, whichever test got there first
        let result = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
