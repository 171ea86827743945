//! The menu loop.

use std::io::{self, Write};

use colored::Colorize;
use log::{debug, info};

use super::input::LineReader;
use super::menu::{print_menu, MenuChoice, DOMAIN_PROMPT};
use crate::checks::run_all_checks;
use crate::dns::TxtResolver;

/// Shell states. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Showing the menu and waiting for a choice
    Menu,
    /// The user exited or input ran out
    Terminated,
}

/// Summary of a finished shell session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellReport {
    /// Number of domains checked
    pub rounds: usize,
    /// Number of unrecognized menu inputs
    pub invalid_choices: usize,
}

/// Runs the interactive checker until the user exits or input ends.
///
/// Input comes from `input`; menus, prompts and check results go to `out`.
/// Check failures are reported inline and never end the session.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub async fn run_shell<R, L, W>(resolver: &R, input: &mut L, out: &mut W) -> io::Result<ShellReport>
where
    R: TxtResolver,
    L: LineReader,
    W: Write,
{
    let mut report = ShellReport::default();
    let mut state = ShellState::Menu;
    while state == ShellState::Menu {
        state = step(resolver, input, out, &mut report).await?;
    }
    info!(
        "Shell finished: {} domain(s) checked, {} invalid choice(s)",
        report.rounds, report.invalid_choices
    );
    Ok(report)
}

/// Runs one menu iteration and returns the next state.
async fn step<R, L, W>(
    resolver: &R,
    input: &mut L,
    out: &mut W,
    report: &mut ShellReport,
) -> io::Result<ShellState>
where
    R: TxtResolver,
    L: LineReader,
    W: Write,
{
    print_menu(out)?;
    let Some(line) = input.next_line()? else {
        debug!("Input closed at the menu prompt");
        writeln!(out)?;
        return Ok(ShellState::Terminated);
    };

    match MenuChoice::parse(&line) {
        MenuChoice::Check => {
            write!(out, "{DOMAIN_PROMPT}")?;
            out.flush()?;
            let Some(domain) = input.next_line()? else {
                debug!("Input closed at the domain prompt");
                writeln!(out)?;
                return Ok(ShellState::Terminated);
            };
            let domain = domain.trim();
            info!("Checking email authentication records for {domain:?}");
            writeln!(out, "{}", "\n[+] Checking Email Security Records:".blue())?;
            run_all_checks(resolver, domain, out).await?;
            report.rounds += 1;
            Ok(ShellState::Menu)
        }
        MenuChoice::Exit => {
            writeln!(out, "{}", "[+] Exiting the program. Goodbye!".green())?;
            out.flush()?;
            Ok(ShellState::Terminated)
        }
        MenuChoice::Invalid => {
            debug!("Invalid menu choice {line:?}");
            report.invalid_choices += 1;
            writeln!(
                out,
                "{}",
                "[-] Invalid choice. Please select 1 or 2.".red()
            )?;
            Ok(ShellState::Menu)
        }
    }
}
