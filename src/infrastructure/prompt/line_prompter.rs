//! Line-oriented prompter for variable values.
//!
//! Prompts go to the output stream (stderr for the CLI) so that stdout only
//! carries the filled template.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::application::{CollectError, ValueCollector};
use crate::core::templates::{Variable, VariableKind};

/// Line that ends a multi-line `text` value
pub const TEXT_TERMINATOR: &str = ".";

/// Asks for each variable on `output` and reads answers from `input`
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading stdin and writing prompts to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask_input(&mut self, variable: &Variable) -> Result<String, CollectError> {
        write!(self.output, "{}: ", variable.name())?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| CollectError::Aborted(variable.name().to_string()))
    }

    fn ask_text(&mut self, variable: &Variable) -> Result<String, CollectError> {
        writeln!(
            self.output,
            "{} (finish with a line containing only '{TEXT_TERMINATOR}'):",
            variable.name()
        )?;
        self.output.flush()?;

        let mut lines: Vec<String> = Vec::new();
        loop {
            match self.read_line()? {
                Some(line) if line == TEXT_TERMINATOR => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => {
                    return Err(CollectError::Aborted(variable.name().to_string()));
                }
                None => break,
            }
        }
        Ok(lines.join("\n"))
    }

    fn ask_select(&mut self, variable: &Variable) -> Result<String, CollectError> {
        let options = variable.options();
        writeln!(self.output, "{}:", variable.name())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }

        loop {
            write!(self.output, "Choose 1-{}: ", options.len())?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Err(CollectError::Aborted(variable.name().to_string()));
            };
            let answer = answer.trim();

            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            let chosen = by_number.or_else(|| options.iter().find(|o| o.as_str() == answer));

            match chosen {
                Some(option) => return Ok(option.clone()),
                None => writeln!(self.output, "Invalid choice '{answer}'")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ValueCollector for LinePrompter<R, W> {
    fn collect(&mut self, variables: &[&Variable]) -> Result<HashMap<String, String>, CollectError> {
        let mut values = HashMap::new();
        for &variable in variables {
            // A name declared twice is asked once
            if values.contains_key(variable.name()) {
                continue;
            }
            let value = match variable.kind() {
                VariableKind::Input => self.ask_input(variable)?,
                VariableKind::Text => self.ask_text(variable)?,
                VariableKind::Select => self.ask_select(variable)?,
            };
            values.insert(variable.name().to_string(), value);
        }
        Ok(values)
    }
}
