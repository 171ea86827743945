//! Menu text and choice parsing.

use std::io::{self, Write};

use colored::Colorize;

const BANNER: &str = r"
########  ##     ##    ###    ########   ######  ##     ##
##     ## ###   ###   ## ##   ##     ## ##    ##  ##   ##
##     ## #### ####  ##   ##  ##     ## ##         ## ##
##     ## ## ### ## ##     ## ########  ##          ###
##     ## ##     ## ######### ##   ##   ##         ## ##
##     ## ##     ## ##     ## ##    ##  ##    ##  ##   ##
########  ##     ## ##     ## ##     ##  ######  ##     ##
";

/// Title line printed under the banner.
pub const TITLE: &str = "=== DMARC, SPF & DKIM Checker ===";
/// Prompt for a menu option.
pub const CHOICE_PROMPT: &str = "Select an option (1/2): ";
/// Prompt for the domain to check.
pub const DOMAIN_PROMPT: &str = "Enter the domain to check (e.g., example.com): ";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: check a domain's records
    Check,
    /// `2`: leave the shell
    Exit,
    /// Anything else
    Invalid,
}

impl MenuChoice {
    /// Parses a menu line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::Check,
            "2" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Writes the banner, title and options, followed by the option prompt.
pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.green())?;
    writeln!(out, "{}", TITLE.cyan().bold())?;
    writeln!(out, "1. Check DMARC/SPF/DKIM Records")?;
    writeln!(out, "2. Exit")?;
    write!(out, "\n{}", CHOICE_PROMPT.yellow())?;
    out.flush()
}
