use crate::parser;
use std::io::{self, BufRead, Result as IoResult, Write};
use thiserror::Error;
use tracing::warn;

/// What a read does with a token that has no value of the expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The read yields the type's zero value and execution continues.
    #[default]
    Lenient,
    /// The read fails with [`InputError::Invalid`].
    Strict,
}

impl InputMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Failure of a console read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected end of input")]
    Eof,
    #[error("invalid input: expected {expected}, found {found:?}")]
    Invalid {
        expected: &'static str,
        found: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prompting reader over a pair of input and output streams.
///
/// Input is consumed a token at a time: numeric and character reads skip
/// whitespace (newlines included) and take only what they need from the next
/// token, leaving the rest buffered for the following read. Whole-line reads
/// return the remainder of the current line.
///
/// `Console` also implements [`Write`], so reports go through `writeln!`.
///
/// Example
/// ```
/// use console_exercises::{Console, InputMode};
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("12 apples\n");
/// let mut output = Vec::new();
/// let mut console = Console::new(&mut input, &mut output, InputMode::Lenient);
/// assert_eq!(console.read_int("How many? ").unwrap(), 12);
/// ```
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    mode: InputMode,
    pending: String,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write, mode: InputMode) -> Self {
        Self {
            input,
            output,
            mode,
            pending: String::new(),
        }
    }

    /// Write `text` without a newline and flush so it shows before the read blocks.
    pub fn prompt(&mut self, text: &str) -> IoResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Prompt for and read one `i32`.
    pub fn read_int(&mut self, prompt: &str) -> Result<i32, InputError> {
        self.prompt(prompt)?;
        self.scan("an integer", parser::int_prefix)
    }

    /// Prompt for and read one `f64`.
    pub fn read_double(&mut self, prompt: &str) -> Result<f64, InputError> {
        self.prompt(prompt)?;
        self.scan("a number", parser::double_prefix)
    }

    /// Prompt for and read the next non-whitespace character.
    pub fn read_char(&mut self, prompt: &str) -> Result<char, InputError> {
        self.prompt(prompt)?;
        self.skip_whitespace()?;
        let c = self.pending.chars().next().ok_or(InputError::Eof)?;
        self.pending.replace_range(..c.len_utf8(), "");
        Ok(c)
    }

    /// Prompt for and read a line of text, ignoring leading whitespace.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompt(prompt)?;
        self.skip_whitespace()?;
        let line = self.pending.trim_end_matches(['\n', '\r']).to_string();
        self.pending.clear();
        Ok(line)
    }

    fn scan<T: Default>(
        &mut self,
        expected: &'static str,
        prefix: fn(&str) -> Option<(T, usize)>,
    ) -> Result<T, InputError> {
        self.skip_whitespace()?;
        if let Some((value, len)) = prefix(&self.pending) {
            self.pending.replace_range(..len, "");
            return Ok(value);
        }
        let found = self.take_token();
        match self.mode {
            InputMode::Lenient => {
                warn!(expected, found = %found, "malformed input read as zero");
                Ok(T::default())
            }
            InputMode::Strict => Err(InputError::Invalid { expected, found }),
        }
    }

    /// Leave `pending` starting at a non-whitespace character, pulling new
    /// lines from the input as needed.
    fn skip_whitespace(&mut self) -> Result<(), InputError> {
        loop {
            let skip = self.pending.len() - self.pending.trim_start().len();
            self.pending.replace_range(..skip, "");
            if !self.pending.is_empty() {
                return Ok(());
            }
            if self.input.read_line(&mut self.pending)? == 0 {
                return Err(InputError::Eof);
            }
        }
    }

    fn take_token(&mut self) -> String {
        let end = self
            .pending
            .find(char::is_whitespace)
            .unwrap_or(self.pending.len());
        self.pending.drain(..end).collect()
    }
}

impl Write for Console<'_> {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.output.write(data)
    }

    fn flush(&mut self) -> IoResult<()> {
        self.output.flush()
    }
}
