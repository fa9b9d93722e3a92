//! Line-based text storage.
//!
//! The `Buffer` owns every line of the document. It always holds at least one
//! line: an empty document is a single empty line.
//!
//! Indices and lengths count characters, not bytes. All indices passed to the
//! mutating operations must already be validated by the caller; an
//! out-of-range index is a programming error and panics.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::Buffer;
//!
//! let mut buffer = Buffer::from_text("hello\nworld");
//! assert_eq!(buffer.line_count(), 2);
//!
//! buffer.insert_text(0, 5, "!");
//! assert_eq!(buffer.line(0), "hello!");
//!
//! let removed = buffer.remove_line(1);
//! assert_eq!(removed, "world");
//! assert_eq!(buffer.line_count(), 1);
//! ```

/// Ordered sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

/// Converts a character index into a byte offset within `line`.
///
/// `col == char count` maps to `line.len()`.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

impl Buffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Creates a buffer from the given lines. An empty list yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Creates a buffer by splitting `text` on newlines.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the content of line `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn line(&self, index: usize) -> &str {
        self.assert_line(index);
        &self.lines[index]
    }

    /// Returns the number of characters on line `index`.
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).chars().count()
    }

    /// Returns the character at `(line, col)`, or `None` at end of line.
    pub fn char_at(&self, line: usize, col: usize) -> Option<char> {
        self.line(line).chars().nth(col)
    }

    /// Inserts a new line so that it ends up at `index`.
    ///
    /// `index == line_count()` appends.
    pub fn insert_line(&mut self, index: usize, content: impl Into<String>) {
        assert!(
            index <= self.lines.len(),
            "insert_line index {} out of range (line count {})",
            index,
            self.lines.len()
        );
        self.lines.insert(index, content.into());
    }

    /// Removes line `index` and returns its content.
    ///
    /// # Panics
    /// Panics if `index` is out of range or if it is the only line left.
    pub fn remove_line(&mut self, index: usize) -> String {
        self.assert_line(index);
        assert!(self.lines.len() > 1, "cannot remove the only line");
        self.lines.remove(index)
    }

    /// Replaces line `index` and returns the previous content.
    pub fn replace_line(&mut self, index: usize, content: impl Into<String>) -> String {
        self.assert_line(index);
        std::mem::replace(&mut self.lines[index], content.into())
    }

    /// Inserts `text` on `line` before character `col`.
    pub fn insert_text(&mut self, line: usize, col: usize, text: &str) {
        self.assert_column(line, col);
        let target = &mut self.lines[line];
        let offset = byte_offset(target.as_str(), col);
        target.insert_str(offset, text);
    }

    /// Removes `len` characters starting at `(line, col)` and returns them.
    pub fn delete_range(&mut self, line: usize, col: usize, len: usize) -> String {
        self.assert_column(line, col + len);
        let target = &mut self.lines[line];
        let start = byte_offset(target.as_str(), col);
        let end = byte_offset(target.as_str(), col + len);
        target.drain(start..end).collect()
    }

    fn assert_line(&self, index: usize) {
        assert!(
            index < self.lines.len(),
            "line index {} out of range (line count {})",
            index,
            self.lines.len()
        );
    }

    fn assert_column(&self, line: usize, col: usize) {
        let len = self.line_len(line);
        assert!(
            col <= len,
            "column {} out of range on line {} (length {})",
            col,
            line,
            len
        );
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
