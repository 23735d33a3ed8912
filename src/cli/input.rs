/*!
 * Prompted Input
 * Line-oriented reading and validation for the interactive session
 */

use crate::core::errors::{InputError, InputResult};
use crate::core::types::Size;
use std::io::{BufRead, Write};

/// Writes a prompt, reads one line back
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `text` and return the next line without its line ending
    pub fn prompt(&mut self, text: &str, field: &str) -> InputResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof {
                field: field.into(),
            });
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// A count; zero is allowed
    pub fn read_count(&mut self, text: &str, field: &str) -> InputResult<usize> {
        let raw = self.prompt(text, field)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|_| InputError::NotANumber {
                field: field.into(),
                value: raw,
            })
    }

    /// A strictly positive size
    pub fn read_size(&mut self, text: &str, field: &str) -> InputResult<Size> {
        let raw = self.prompt(text, field)?;
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber {
                field: field.into(),
                value: raw.clone(),
            })?;

        match Size::try_from(value) {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(InputError::NotPositive {
                field: field.into(),
                value,
            }),
        }
    }

    /// A non-empty label, surrounding whitespace removed
    pub fn read_name(&mut self, text: &str, field: &str) -> InputResult<String> {
        let raw = self.prompt(text, field)?;
        let name = raw.trim();
        if name.is_empty() {
            return Err(InputError::Empty {
                field: field.into(),
            });
        }
        Ok(name.to_string())
    }
}
