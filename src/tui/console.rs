//! Blocking line-oriented console: frame output and typed reads.
//!
//! The console is the only place where frames and prompts reach the output
//! stream. Input is read one whole line at a time, so whatever the user types
//! after the value is discarded together with the line and never leaks into
//! the next read.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use log::debug;

use super::{
    format::INPUT_MARKER,
    screen::{ClearMode, clear_screen},
};

/// Returned (wrapped in `anyhow::Error`) when the input stream has no more
/// lines to offer.
#[derive(Debug, Display, Error)]
#[display("input stream closed")]
pub struct InputClosed;

/// Outcome of reading a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    /// The input parsed as the requested type.
    Value(T),
    /// The input could not be parsed.
    Malformed,
}

/// Input reader and output writer for one interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: ClearMode,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process' standard streams.
    #[must_use]
    pub fn stdio(clear: ClearMode) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear)
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    #[must_use]
    pub fn new(input: R, output: W, clear: ClearMode) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Clears the screen and writes one complete frame.
    pub fn present(&mut self, frame: &str) -> Result<()> {
        clear_screen(&mut self.output, self.clear).context("Unable to clear the screen")?;
        self.output
            .write_all(frame.as_bytes())
            .context("Unable to write frame")?;
        self.output.flush().context("Unable to flush frame")?;
        Ok(())
    }

    /// Prompts for an integer.
    ///
    /// Blank lines are skipped without re-prompting. The first token of the
    /// line is read as an optional sign followed by digits; anything after
    /// those digits, and the rest of the line, is discarded.
    pub fn read_int(&mut self, prompt: &str) -> Result<Entry<i64>> {
        self.write_prompt(prompt)?;

        loop {
            let line = self.next_line()?;
            if let Some(token) = line.split_whitespace().next() {
                let entry = parse_leading_int(token).map_or(Entry::Malformed, Entry::Value);
                debug!("read_int '{token}'");
                return Ok(entry);
            }
        }
    }

    /// Prompts for one line of text. The line terminator is removed; the
    /// result is empty when the user just pressed Enter.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write_prompt(prompt)?;
        self.next_line()
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{INPUT_MARKER}{prompt}").context("Unable to write prompt")?;
        self.output.flush().context("Unable to flush prompt")?;
        Ok(())
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Unable to read input")?;

        if read == 0 {
            return Err(InputClosed.into());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

/// Parses the integer at the start of `token`, ignoring any suffix.
fn parse_leading_int(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_len = token
        .get(sign_len..)?
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    token.get(..sign_len.saturating_add(digits_len))?.parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            ClearMode::Ansi,
        )
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_read_int_writes_prompt() {
        let mut console = console("5\n");
        assert_eq!(console.read_int("Pick: ").unwrap(), Entry::Value(5));
        assert_eq!(String::from_utf8_lossy(console.output()), " >> Pick: ");
    }

    #[test]
    fn test_read_int_discards_rest_of_line() {
        let mut console = console("12 34\n7\n");
        assert_eq!(console.read_int("").unwrap(), Entry::Value(12));
        assert_eq!(console.read_int("").unwrap(), Entry::Value(7));
    }

    #[test]
    fn test_read_int_malformed_does_not_leak_into_next_read() {
        let mut console = console("abc 5\n3\n");
        assert_eq!(console.read_int("").unwrap(), Entry::Malformed);
        assert_eq!(console.read_int("").unwrap(), Entry::Value(3));
    }

    #[test]
    fn test_read_int_skips_blank_lines() {
        let mut console = console("\n   \n8\n");
        assert_eq!(console.read_int("").unwrap(), Entry::Value(8));
    }

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut console = console("  Jane Doe \r\n\n");
        assert_eq!(console.read_line("").unwrap(), "  Jane Doe ");
        assert_eq!(console.read_line("").unwrap(), "");
    }

    #[test]
    fn test_read_line_without_trailing_newline() {
        let mut console = console("last");
        assert_eq!(console.read_line("").unwrap(), "last");
    }

    #[test]
    fn test_closed_input_is_reported() {
        let mut console = console("");
        let err = console.read_int("").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn test_present_clears_before_frame() {
        let mut console = console("");
        console.present("frame\n").unwrap();
        let output = String::from_utf8_lossy(console.output()).to_string();
        assert!(output.starts_with("\x1b[2J"));
        assert!(output.ends_with("frame\n"));
    }
}
