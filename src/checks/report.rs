//! Status-line rendering for check outcomes.
//!
//! Lines start with a bracketed glyph: `[✓]` found, `[✗]` not found,
//! `[-]` failed, `[*]` detail. Color is cosmetic; the text carries all of it.

use std::io::{self, Write};

use colored::Colorize;

use super::{CheckKind, CheckOutcome};

/// Writes the status line(s) for one check outcome.
///
/// A found record that carries a policy (DMARC) gets a second line naming it.
pub fn render_outcome<W: Write>(
    out: &mut W,
    kind: CheckKind,
    domain: &str,
    outcome: &CheckOutcome,
) -> io::Result<()> {
    match outcome {
        CheckOutcome::Found {
            record,
            policy: Some(policy),
        } => {
            writeln!(out, "{}{record}", format!("[✓] {kind} record found: ").green())?;
            writeln!(
                out,
                "{}{}",
                format!("[*] {kind} Policy: ").blue(),
                policy.colored_tag()
            )?;
        }
        CheckOutcome::Found {
            record,
            policy: None,
        } => {
            writeln!(
                out,
                "{}",
                format!("[✓] {kind} record found: {record}").green()
            )?;
        }
        CheckOutcome::NotFound => {
            writeln!(
                out,
                "{}",
                format!("[✗] {kind} record not found for {domain}").red()
            )?;
        }
        CheckOutcome::Failed(message) => {
            writeln!(out, "{}", format!("[-] {kind} check failed: {message}").red())?;
        }
    }
    Ok(())
}
