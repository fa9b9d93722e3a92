//! Line-at-a-time command loop.

use crate::editor::state::{EditorState, Outcome};
use crate::ui::help::HELP_TEXT;
use crate::ui::render_buffer;
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Write};

/// Reads raw command lines and feeds them to an `EditorState`.
///
/// The handler owns the input side only; output goes to whatever writer is
/// passed to `handle_line` or `run`, so the same loop drives a terminal and
/// a test harness.
pub struct InputHandler<R> {
    reader: R,
    line: String,
}

impl InputHandler<StdinLock<'static>> {
    /// Creates a handler that reads from stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputHandler<R> {
    /// Creates a handler reading from `reader`.
    ///
    /// # Example
    ///
    /// ```
    /// use linequill::input::InputHandler;
    ///
    /// let mut handler = InputHandler::new("i hi\nq\n".as_bytes());
    /// assert_eq!(handler.read_command().unwrap(), Some("i hi".to_string()));
    /// ```
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Reads the next command line with its line ending removed.
    ///
    /// Returns `None` at end of input.
    pub fn read_command(&mut self) -> Result<Option<String>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .context("Failed to read command")?;
        if read == 0 {
            return Ok(None);
        }
        let command = self.line.trim_end_matches(['\n', '\r']);
        Ok(Some(command.to_string()))
    }

    /// Executes one command line and writes its result to `out`.
    ///
    /// Returns `Ok(true)` if the session should end.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        state: &mut EditorState,
        out: &mut W,
    ) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(false);
        }

        match state.execute(line) {
            Ok(Outcome::Quit) => return Ok(true),
            Ok(Outcome::Help) => writeln!(out, "{}", HELP_TEXT)?,
            Ok(outcome) => {
                if outcome.needs_render() {
                    for rendered in render_buffer(state) {
                        writeln!(out, "{}", rendered)?;
                    }
                }
            }
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        Ok(false)
    }

    /// Runs the read-execute-render loop until `q` or end of input.
    ///
    /// `prompt` is written before each read; pass an empty string to disable it.
    pub fn run<W: Write>(
        &mut self,
        state: &mut EditorState,
        out: &mut W,
        prompt: &str,
    ) -> Result<()> {
        loop {
            if !prompt.is_empty() {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            let line = match self.read_command()? {
                Some(line) => line,
                None => break,
            };

            if self.handle_line(&line, state, out)? {
                break;
            }
        }
        tracing::debug!(lines = state.buffer().line_count(), "session ended");
        Ok(())
    }
}
