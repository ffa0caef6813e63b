use anyhow::{bail, Result};
use crossterm::style::Stylize;
use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented terminal wrapper. Generic over the reader and writer so
/// interactive screen flows can be driven from in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of plain text.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a styled section header.
    pub fn headline(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref().bold().cyan())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a recoverable error message.
    pub fn report(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message.to_string().red())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write `prompt`, then block for one line of input. The returned token
    /// is trimmed of surrounding whitespace. Errors if the input stream is
    /// closed, since no further interaction is possible.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    /// Block until the user presses Enter.
    pub fn pause(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to return to the script menu.")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
