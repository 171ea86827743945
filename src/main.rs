//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailauth_check` library that handles:
//! - Command-line argument parsing
//! - Logger and resolver initialization
//! - Wiring the shell to stdin/stdout
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use mailauth_check::initialization::{init_logger_with, init_resolver};
use mailauth_check::{run_shell, Config};

// Everything runs on one thread: each lookup blocks the session until it returns
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if config.no_color {
        colored::control::set_override(false);
    }

    let resolver = init_resolver();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    match run_shell(&resolver, &mut input, &mut out).await {
        Ok(report) => {
            log::debug!(
                "Session ended after {} round(s), {} invalid choice(s)",
                report.rounds,
                report.invalid_choices
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("mailauth_check error: {:#}", e);
            process::exit(1);
        }
    }
}
