//! Line input for the interactive shell.

use std::io::{self, BufRead};

/// Source of user input lines.
///
/// Any `BufRead` is a `LineReader`, so the shell runs the same on locked
/// stdin as on an in-memory `Cursor` in tests.
pub trait LineReader {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineReader for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
