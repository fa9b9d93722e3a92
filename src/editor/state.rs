//! Editor session state and command interpreter.
//!
//! This module provides the `EditorState` struct that owns everything one
//! editing session needs: the buffer, the cursor, the clipboard register, the
//! undo history and the display toggles. There is no global state; each
//! `EditorState` is an independent session.
//!
//! # Command execution
//!
//! `execute` parses a raw command line and dispatches it. Every mutating
//! command, fresh or repeated, runs through the same `run` path, which
//! validates against the current buffer and cursor before touching anything,
//! applies the change, pushes the inverse `Delta`, and records the invocation
//! as the repeat target. A failed command leaves the session unchanged.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::Buffer;
//! use linequill::editor::cursor::Cursor;
//! use linequill::editor::state::EditorState;
//!
//! let mut state = EditorState::new(Buffer::from_lines(["Hellp World"]));
//! state.execute("l").unwrap();
//! state.execute("l").unwrap();
//! state.execute("l").unwrap();
//! state.execute("l").unwrap();
//!
//! state.execute("x").unwrap();
//! assert_eq!(state.lines(), &["Hell World"]);
//!
//! state.execute("u").unwrap();
//! assert_eq!(state.lines(), &["Hellp World"]);
//! assert_eq!(state.cursor(), Cursor::new(0, 4));
//! ```

use super::buffer::Buffer;
use super::command::{parse_command, Command};
use super::cursor::Cursor;
use super::error::EditError;
use super::motion;
use super::registers::Clipboard;
use super::repeat::RepeatableCommand;
use super::undo::{Delta, DeltaKind, History};

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer changed and a delta was recorded.
    Edited,
    /// The command had nothing to do (paste with an empty clipboard).
    Unchanged,
    /// Only the cursor moved.
    Moved,
    /// The current line was copied to the clipboard.
    Yanked,
    /// The most recent change was reverted.
    Undone,
    /// A display flag was toggled.
    DisplayToggled,
    /// The shell should render the buffer.
    Render,
    /// The shell should show help.
    Help,
    /// The shell should end the session.
    Quit,
}

impl Outcome {
    /// True if the shell should print the buffer after this outcome.
    pub fn needs_render(&self) -> bool {
        !matches!(self, Outcome::Help | Outcome::Quit)
    }
}

/// Cursor visibility toggles used by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Highlight the character under the cursor.
    pub row_cursor: bool,
    /// Mark the current line.
    pub line_cursor: bool,
}

/// One editing session.
#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: Buffer,
    cursor: Cursor,
    clipboard: Clipboard,
    history: History,
    display: DisplayFlags,
}

impl EditorState {
    /// Creates a session over `buffer` with the cursor at the origin and an
    /// unbounded history.
    pub fn new(buffer: Buffer) -> Self {
        Self::with_undo_limit(buffer, 0)
    }

    /// Creates a session whose history keeps at most `undo_limit` deltas
    /// (0 for no limit).
    pub fn with_undo_limit(buffer: Buffer, undo_limit: usize) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            clipboard: Clipboard::new(),
            history: History::new(undo_limit),
            display: DisplayFlags::default(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Moves the cursor, clamping it into the buffer.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.cursor.clamp(&self.buffer);
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the invocation `r` would repeat.
    pub fn last_command(&self) -> Option<&RepeatableCommand> {
        self.history.last_command()
    }

    pub fn display_flags(&self) -> DisplayFlags {
        self.display
    }

    pub fn set_display_flags(&mut self, flags: DisplayFlags) {
        self.display = flags;
    }

    /// Parses and executes one raw command line.
    pub fn execute(&mut self, raw: &str) -> Result<Outcome, EditError> {
        let result = parse_command(raw).and_then(|command| self.dispatch(command));
        match &result {
            Ok(outcome) => tracing::debug!(command = raw, ?outcome, "command executed"),
            Err(err) => tracing::debug!(command = raw, %err, "command failed"),
        }
        result
    }

    /// Executes an already parsed command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, EditError> {
        let outcome = match command {
            Command::Help => Outcome::Help,
            Command::Show => Outcome::Render,
            Command::Quit => Outcome::Quit,
            Command::ToggleRowCursor => {
                self.display.row_cursor = !self.display.row_cursor;
                Outcome::DisplayToggled
            }
            Command::ToggleLineCursor => {
                self.display.line_cursor = !self.display.line_cursor;
                Outcome::DisplayToggled
            }
            Command::MoveLeft => {
                self.cursor.move_left();
                Outcome::Moved
            }
            Command::MoveRight => {
                self.cursor.move_right(&self.buffer);
                Outcome::Moved
            }
            Command::MoveDown => {
                self.cursor.move_down(&self.buffer);
                Outcome::Moved
            }
            Command::MoveUp => {
                self.cursor.move_up(&self.buffer);
                Outcome::Moved
            }
            Command::LineStart => {
                self.cursor.move_line_start();
                Outcome::Moved
            }
            Command::LineEnd => {
                self.cursor.move_line_end(&self.buffer);
                Outcome::Moved
            }
            Command::NextWord => {
                self.cursor = motion::next_word(&self.buffer, self.cursor);
                Outcome::Moved
            }
            Command::PrevWord => {
                self.cursor = motion::prev_word(&self.buffer, self.cursor);
                Outcome::Moved
            }
            Command::Yank => {
                self.clipboard.set(self.buffer.line(self.cursor.line));
                Outcome::Yanked
            }
            Command::Undo => return self.undo(),
            Command::Repeat => return self.repeat(),
            Command::Edit(cmd) => return self.run(cmd),
        };
        Ok(outcome)
    }

    /// Runs a mutating command against the current state.
    ///
    /// On success the inverse delta is pushed and `cmd` becomes the repeat
    /// target. A paste with an empty clipboard records nothing.
    pub fn run(&mut self, cmd: RepeatableCommand) -> Result<Outcome, EditError> {
        match self.apply(&cmd)? {
            Some(delta) => {
                self.history.push(delta);
                self.history.set_last_command(cmd);
                debug_assert!(self.cursor.is_within(&self.buffer));
                Ok(Outcome::Edited)
            }
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Reverts the most recent change.
    ///
    /// Restores the buffer and the cursor to exactly what they were before
    /// that change. Undo is not itself recorded.
    pub fn undo(&mut self) -> Result<Outcome, EditError> {
        let delta = self.history.pop().ok_or(EditError::NothingToUndo)?;
        tracing::debug!(kind = ?delta.kind, "undoing");
        self.cursor = delta.revert(&mut self.buffer);
        Ok(Outcome::Undone)
    }

    /// Re-runs the last mutating command at the current cursor.
    pub fn repeat(&mut self) -> Result<Outcome, EditError> {
        let cmd = self
            .history
            .last_command()
            .cloned()
            .ok_or(EditError::NothingToRepeat)?;
        tracing::debug!(?cmd, "repeating");
        self.run(cmd)
    }

    /// Applies `cmd` and returns its inverse, or `None` when nothing changed.
    fn apply(&mut self, cmd: &RepeatableCommand) -> Result<Option<Delta>, EditError> {
        let before = self.cursor;
        let line = before.line;

        let kind = match cmd {
            RepeatableCommand::Insert { text } => self.insert_at(line, before.column, text),
            RepeatableCommand::Append { text } => {
                let column = (before.column + 1).min(self.buffer.line_len(line));
                self.insert_at(line, column, text)
            }
            RepeatableCommand::DeleteChar => {
                let ch = self
                    .buffer
                    .char_at(line, before.column)
                    .ok_or(EditError::NothingToDelete)?;
                self.buffer.delete_range(line, before.column, 1);
                self.cursor.clamp(&self.buffer);
                DeltaKind::CharDelete {
                    ch,
                    line,
                    column: before.column,
                }
            }
            RepeatableCommand::DeleteWord => {
                let len = motion::word_delete_len(self.buffer.line(line), before.column);
                if len == 0 {
                    return Err(EditError::NothingToDelete);
                }
                let text = self.buffer.delete_range(line, before.column, len);
                self.cursor.clamp(&self.buffer);
                DeltaKind::WordDelete {
                    text,
                    line,
                    column: before.column,
                }
            }
            RepeatableCommand::DeleteLine => {
                let kind = if self.buffer.line_count() > 1 {
                    let content = self.buffer.remove_line(line);
                    self.clipboard.set(content.as_str());
                    DeltaKind::LineDelete {
                        content,
                        index: line,
                    }
                } else {
                    // The sole line is cleared so the buffer never goes empty.
                    let content = self.buffer.replace_line(line, String::new());
                    self.clipboard.set(content.as_str());
                    DeltaKind::LineClear {
                        content,
                        index: line,
                    }
                };
                self.set_cursor(Cursor::new(line, 0));
                kind
            }
            RepeatableCommand::OpenBelow => {
                self.buffer.insert_line(line + 1, String::new());
                self.cursor = Cursor::new(line + 1, 0);
                DeltaKind::LineInsert { index: line + 1 }
            }
            RepeatableCommand::OpenAbove => {
                self.buffer.insert_line(line, String::new());
                self.cursor = Cursor::new(line, 0);
                DeltaKind::LineInsert { index: line }
            }
            RepeatableCommand::Paste { before: above } => {
                let content = match self.clipboard.get() {
                    Some(content) => content.to_string(),
                    None => return Ok(None),
                };
                if *above {
                    self.buffer.insert_line(line, content);
                    self.set_cursor(Cursor::new(line, before.column));
                    DeltaKind::LineInsert { index: line }
                } else {
                    self.buffer.insert_line(line + 1, content);
                    self.cursor = Cursor::new(line + 1, 0);
                    DeltaKind::LineInsert { index: line + 1 }
                }
            }
        };

        Ok(Some(Delta::new(kind, before)))
    }

    fn insert_at(&mut self, line: usize, column: usize, text: &str) -> DeltaKind {
        self.buffer.insert_text(line, column, text);
        self.cursor = Cursor::new(line, column + text.chars().count());
        DeltaKind::TextInsert {
            text: text.to_string(),
            line,
            column,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Buffer::new())
    }
}
