//! Interactive text shell.
//!
//! A two-state loop (`Menu` → `Terminated`) over an injected `LineReader`:
//! - `1` asks for a domain and runs the DMARC, SPF and DKIM checks
//! - `2` exits
//! - anything else prints an invalid-choice message and shows the menu again
//!
//! End of input is treated like `2`.

mod input;
mod menu;
mod session;

// Re-export public API
pub use input::LineReader;
pub use menu::{MenuChoice, CHOICE_PROMPT, DOMAIN_PROMPT, TITLE};
pub use session::{run_shell, ShellReport, ShellState};
