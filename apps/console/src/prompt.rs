//! # Prompter
//!
//! Line-oriented operator I/O over any `BufRead` + `Write` pair, so the
//! menu runs the same against a terminal or an in-memory script.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use pantry_core::Money;
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Prompts until the answer parses as `T`.
    ///
    /// Each unparsable answer is reported and the prompt repeated.
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, field: &str) -> ConsoleResult<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_field(field, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(e)?,
            }
        }
    }

    pub fn read_i64(&mut self, prompt: &str, field: &str) -> ConsoleResult<Option<i64>> {
        self.read_parsed(prompt, field)
    }

    pub fn read_money(&mut self, prompt: &str) -> ConsoleResult<Option<Money>> {
        self.read_parsed(prompt, "price")
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses `input` as `T`, naming `field` in the error.
pub fn parse_field<T: FromStr>(field: &str, input: &str) -> ConsoleResult<T> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| ConsoleError::malformed(field, input))
}
