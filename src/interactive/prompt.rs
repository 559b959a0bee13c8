//! Validating line prompts

use super::input::InvalidInputError;
use super::prompts::{INVALID, PROMPT_MARKER};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Reading an answer failed for good
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed")]
    Closed,
    #[error("gave up after {attempts} invalid answers")]
    RetriesExhausted { attempts: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Asks questions over a line-based input and re-asks until the answer fits
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_retries: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: None,
        }
    }

    /// Limit invalid answers per question; `None` retries forever
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: Option<usize>) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask `prompt` until `parse` accepts the answer
    ///
    /// Rejected answers print an INVALID notice and the prompt again.
    ///
    /// # Errors
    /// Returns `InputError::Closed` at end of input, `RetriesExhausted` once a
    /// configured retry ceiling is reached, or any I/O error.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, InputError>
    where
        F: Fn(&str) -> Result<T, InvalidInputError>,
    {
        write!(self.output, "{PROMPT_MARKER}")?;
        let mut rejected = 0;

        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, "answer rejected");
                    rejected += 1;
                    if let Some(max) = self.max_retries
                        && rejected >= max
                    {
                        return Err(InputError::RetriesExhausted { attempts: rejected });
                    }
                    write!(self.output, "{INVALID}")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        // Undecodable bytes become U+FFFD and then fail validation like any other bad answer
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}
