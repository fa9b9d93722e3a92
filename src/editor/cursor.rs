//! Cursor position tracking for the line buffer.
//!
//! This module provides the `Cursor` struct that represents the current edit
//! position as a `(line, column)` pair. The column may equal the length of the
//! current line, which is the valid "end of line" position.
//!
//! # Clamping
//!
//! After every buffer mutation the cursor is clamped so that
//! `line < line_count()` and `column <= line_len(line)`. Horizontal motion
//! never wraps to adjacent lines; vertical motion re-clamps the column to the
//! length of the line it lands on.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::Buffer;
//! use linequill::editor::cursor::Cursor;
//!
//! let buffer = Buffer::from_lines(["hello", "hi"]);
//! let mut cursor = Cursor::new(0, 4);
//!
//! cursor.move_down(&buffer);
//! assert_eq!(cursor, Cursor::new(1, 2));
//!
//! cursor.move_left();
//! assert_eq!(cursor.column, 1);
//! ```

use super::buffer::Buffer;

/// Edit position within the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    /// Creates a cursor at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::editor::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(2, 5);
    /// assert_eq!(cursor.line, 2);
    /// assert_eq!(cursor.column, 5);
    /// ```
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Pulls the cursor back inside the buffer.
    ///
    /// `line = min(line, line_count - 1)`, then
    /// `column = min(column, line_len(line))`.
    pub fn clamp(&mut self, buffer: &Buffer) {
        self.line = self.line.min(buffer.line_count() - 1);
        self.column = self.column.min(buffer.line_len(self.line));
    }

    /// Returns true if the cursor satisfies the clamping invariant.
    pub fn is_within(&self, buffer: &Buffer) -> bool {
        self.line < buffer.line_count() && self.column <= buffer.line_len(self.line)
    }

    pub fn move_left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn move_right(&mut self, buffer: &Buffer) {
        if self.column < buffer.line_len(self.line) {
            self.column += 1;
        }
    }

    /// Moves one line down, staying put on the last line.
    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
        }
        self.clamp(buffer);
    }

    /// Moves one line up, staying put on the first line.
    pub fn move_up(&mut self, buffer: &Buffer) {
        self.line = self.line.saturating_sub(1);
        self.clamp(buffer);
    }

    pub fn move_line_start(&mut self) {
        self.column = 0;
    }

    pub fn move_line_end(&mut self, buffer: &Buffer) {
        self.column = buffer.line_len(self.line);
    }
}
