//! Line-oriented prompts
//!
//! Every screen reads and writes through a [`Prompter`] so the menus can be
//! driven from any reader, stdin in the binary and byte buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::error::{YardError, YardResult};

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write one line
    pub fn say(&mut self, text: impl Display) -> YardResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text as-is (no trailing newline added)
    pub fn show(&mut self, text: impl Display) -> YardResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn warn(&mut self, text: impl Display) -> YardResult<()> {
        self.say(format_args!("Warning: {}", text))
    }

    /// Print a recoverable error and carry on
    ///
    /// [`YardError::InputClosed`] is handed back so the caller can unwind.
    pub fn report(&mut self, err: YardError) -> YardResult<()> {
        if err.is_input_closed() {
            return Err(err);
        }
        self.say(format_args!("Error: {}", err))
    }

    /// Warn that a saved change is missing from the audit log
    pub fn unaudited(&mut self, audit_error: Option<YardError>) -> YardResult<()> {
        match audit_error {
            Some(err) => self.warn(format_args!("change saved but not audited ({})", err)),
            None => Ok(()),
        }
    }

    fn read_line(&mut self) -> YardResult<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(YardError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for free text
    pub fn text(&mut self, prompt: &str) -> YardResult<String> {
        self.show(prompt)?;
        self.read_line()
    }

    /// Ask for a whole number; anything unparseable counts as 0
    pub fn integer(&mut self, prompt: &str) -> YardResult<i64> {
        let answer = self.text(prompt)?;
        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.warn("not a whole number, using 0")?;
                Ok(0)
            }
        }
    }

    /// Ask for how many values follow
    ///
    /// Parsed as a 32-bit count; anything unparseable or out of that range
    /// counts as 0, which callers reject.
    pub fn count(&mut self, prompt: &str) -> YardResult<i32> {
        let answer = self.text(prompt)?;
        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.warn("not a valid count, using 0")?;
                Ok(0)
            }
        }
    }

    /// Ask for a menu option; anything unparseable is option 0
    pub fn menu_choice(&mut self, prompt: &str) -> YardResult<i64> {
        Ok(self.text(prompt)?.parse().unwrap_or(0))
    }

    /// Ask for a decimal, repeating the question until one is given
    pub fn decimal(&mut self, prompt: &str) -> YardResult<f64> {
        loop {
            let answer = self.text(prompt)?;
            match parse_amount(&answer) {
                Some(value) => return Ok(value),
                None => self.warn("enter a valid number")?,
            }
        }
    }

    /// Ask for a decimal; anything unparseable counts as 0
    pub fn decimal_or_zero(&mut self, prompt: &str) -> YardResult<f64> {
        let answer = self.text(prompt)?;
        match parse_amount(&answer) {
            Some(value) => Ok(value),
            None => {
                self.warn("not a valid amount, using 0.00")?;
                Ok(0.0)
            }
        }
    }

    /// Yes/no question; `S`/`s` (si) and `Y`/`y` mean yes
    pub fn confirm(&mut self, prompt: &str) -> YardResult<bool> {
        let answer = self.text(prompt)?;
        Ok(matches!(answer.chars().next(), Some('S' | 's' | 'Y' | 'y')))
    }

    /// Wait for ENTER, then clear the screen when enabled
    pub fn pause(&mut self) -> YardResult<()> {
        self.show("\nPress ENTER to continue...")?;
        self.read_line()?;
        self.say("")?;
        self.clear()
    }

    pub fn clear(&mut self) -> YardResult<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
