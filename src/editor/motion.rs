//! Word motions.
//!
//! A word is a maximal run of non-whitespace characters. Word starts are
//! found by scanning a line for positions where a non-whitespace character
//! follows whitespace (or the start of the line).

use super::buffer::Buffer;
use super::cursor::Cursor;

/// Returns the character columns at which words begin on `line`.
pub fn word_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev_is_space = true;
    for (col, ch) in line.chars().enumerate() {
        let is_space = ch.is_whitespace();
        if !is_space && prev_is_space {
            starts.push(col);
        }
        prev_is_space = is_space;
    }
    starts
}

/// First word start strictly after `col`, if any.
pub fn next_word_start(line: &str, col: usize) -> Option<usize> {
    word_starts(line).into_iter().find(|&start| start > col)
}

/// Last word start strictly before `col`, if any.
pub fn prev_word_start(line: &str, col: usize) -> Option<usize> {
    word_starts(line).into_iter().rev().find(|&start| start < col)
}

/// Number of characters `dw` removes from `col`: the word at or after the
/// cursor plus trailing whitespace, up to the next word or the end of line.
pub fn word_delete_len(line: &str, col: usize) -> usize {
    let len = line.chars().count();
    if col >= len {
        return 0;
    }
    next_word_start(line, col).unwrap_or(len) - col
}

/// Position `w` moves to from `cursor`.
///
/// Falls through to column 0 of the next line when the current line has no
/// further word, and clamps at the end of the last line.
pub fn next_word(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if let Some(col) = next_word_start(buffer.line(cursor.line), cursor.column) {
        return Cursor::new(cursor.line, col);
    }
    if cursor.line + 1 < buffer.line_count() {
        Cursor::new(cursor.line + 1, 0)
    } else {
        Cursor::new(cursor.line, buffer.line_len(cursor.line))
    }
}

/// Position `b` moves to from `cursor`.
///
/// Falls through to the last word start of the previous line (column 0 if
/// that line has no words), and clamps at the start of the buffer.
pub fn prev_word(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if let Some(col) = prev_word_start(buffer.line(cursor.line), cursor.column) {
        return Cursor::new(cursor.line, col);
    }
    if cursor.line > 0 {
        let line = cursor.line - 1;
        let col = word_starts(buffer.line(line)).last().copied().unwrap_or(0);
        Cursor::new(line, col)
    } else {
        Cursor::new(0, 0)
    }
}
