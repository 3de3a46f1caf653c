//! # Terminal Input Helper
//!
//! Prompts for a line of input until it satisfies a [`ValidationRule`].
//! Every violation of a rejected answer is printed before asking again.
//!
//! ## Example
//! ```rust,ignore
//! use stringkit::ValidationRule;
//!
//! let rule = ValidationRule::new().min_length(3).max_length(12);
//! let input = Terminal::ask("Pick a username:", &rule)?;
//! println!("Accepted: {}", input.answer);
//! ```
use std::io::{self, BufRead, Write};

use log::debug;
use stringkit::{ValidationRule, validate_string};

/// The accepted answer of a prompt.
pub struct Terminal {
    pub answer: String,
}

impl Terminal {
    /// Asks on stdout and reads stdin until an answer passes `rule`.
    ///
    /// # Errors
    /// Fails when stdin is closed before a valid answer arrives or on I/O errors.
    pub fn ask(question: &str, rule: &ValidationRule) -> io::Result<Terminal> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::ask_with(&mut stdin.lock(), &mut stdout.lock(), question, rule)
    }

    /// Same as [`Terminal::ask`] over arbitrary streams.
    ///
    /// The answer is trimmed before validation.
    pub fn ask_with<R: BufRead, W: Write>(
        reader: &mut R,
        writer: &mut W,
        question: &str,
        rule: &ValidationRule,
    ) -> io::Result<Terminal> {
        let answer: String = loop {
            writeln!(writer, "{}", question)?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid answer was given",
                ));
            }

            let clean_answer = line.trim();
            let report = validate_string(clean_answer, rule);
            if report.valid {
                break clean_answer.to_string();
            }

            debug!("rejected answer with {} error(s)", report.errors.len());
            for error in &report.errors {
                writeln!(writer, "{}, try again!", error)?;
            }
        };

        Ok(Terminal { answer })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_terminal_accepts_first_valid_answer() {
        let mut input = Cursor::new("  rustacean  \n");
        let mut output = Vec::new();
        let rule = ValidationRule::new().min_length(3);

        let terminal = Terminal::ask_with(&mut input, &mut output, "Name?", &rule).unwrap();
        assert_eq!(terminal.answer, "rustacean");
        assert_eq!(String::from_utf8(output).unwrap(), "Name?\n");
    }

    #[test]
    fn test_terminal_reprompts_with_every_error() {
        let mut input = Cursor::new("x\nhello\n");
        let mut output = Vec::new();
        let rule = ValidationRule::new()
            .min_length(3)
            .with_pattern_str("^[a-z]{4,}$")
            .unwrap();

        let terminal = Terminal::ask_with(&mut input, &mut output, "Word?", &rule).unwrap();
        assert_eq!(terminal.answer, "hello");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Word?\n\
             String must be at least 3 characters long, try again!\n\
             String does not match required pattern, try again!\n\
             Word?\n"
        );
    }

    #[test]
    fn test_terminal_eof_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let res = Terminal::ask_with(&mut input, &mut output, "?", &ValidationRule::new());
        assert!(matches!(res, Err(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
