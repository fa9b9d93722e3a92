//! Single-step undo built on a stack of inverse deltas.
//!
//! Every mutating command pushes one `Delta` describing how to reverse it.
//! A delta is self-contained: it carries the removed text or the inserted
//! position plus the cursor as it was before the command ran, so reverting
//! never needs to look at anything but the buffer it is applied to.
//!
//! # Architecture
//!
//! - `DeltaKind`: what was changed and where
//! - `Delta`: a `DeltaKind` plus the cursor to restore
//! - `History`: LIFO stack of deltas and the last repeatable invocation

use super::buffer::Buffer;
use super::cursor::Cursor;
use super::repeat::RepeatableCommand;

/// The buffer change recorded by a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaKind {
    /// `x` removed `ch` at `(line, column)`
    CharDelete { ch: char, line: usize, column: usize },
    /// `dw` removed `text` starting at `(line, column)`
    WordDelete {
        text: String,
        line: usize,
        column: usize,
    },
    /// `dd` removed the line that was at `index`
    LineDelete { content: String, index: usize },
    /// `dd` on the only line cleared it instead of removing it
    LineClear { content: String, index: usize },
    /// `o`, `O`, `p` or `P` inserted a line at `index`
    LineInsert { index: usize },
    /// `i` or `a` inserted `text` starting at `(line, column)`
    TextInsert {
        text: String,
        line: usize,
        column: usize,
    },
}

/// Recorded inverse of one mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    pub kind: DeltaKind,
    /// Cursor position before the command ran.
    pub cursor: Cursor,
}

impl Delta {
    pub fn new(kind: DeltaKind, cursor: Cursor) -> Self {
        Self { kind, cursor }
    }

    /// Reverses the recorded change on `buffer` and returns the cursor to restore.
    pub fn revert(&self, buffer: &mut Buffer) -> Cursor {
        match &self.kind {
            DeltaKind::CharDelete { ch, line, column } => {
                let mut text = [0u8; 4];
                buffer.insert_text(*line, *column, ch.encode_utf8(&mut text));
            }
            DeltaKind::WordDelete { text, line, column } => {
                buffer.insert_text(*line, *column, text);
            }
            DeltaKind::LineDelete { content, index } => {
                buffer.insert_line(*index, content.clone());
            }
            DeltaKind::LineClear { content, index } => {
                buffer.replace_line(*index, content.clone());
            }
            DeltaKind::LineInsert { index } => {
                buffer.remove_line(*index);
            }
            DeltaKind::TextInsert { text, line, column } => {
                buffer.delete_range(*line, *column, text.chars().count());
            }
        }
        self.cursor
    }
}

/// Command stack used for undo and repeat.
///
/// `limit` bounds the number of stored deltas; 0 means unbounded. When the
/// limit is exceeded the oldest deltas are dropped, so the most recent
/// command can always be undone.
#[derive(Debug, Clone, Default)]
pub struct History {
    deltas: Vec<Delta>,
    last_command: Option<RepeatableCommand>,
    limit: usize,
}

impl History {
    /// Creates an empty history.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of deltas to keep (0 for no limit)
    pub fn new(limit: usize) -> Self {
        Self {
            deltas: Vec::new(),
            last_command: None,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pushes a delta, evicting the oldest entries past the limit.
    pub fn push(&mut self, delta: Delta) {
        tracing::trace!(?delta, "recording delta");
        self.deltas.push(delta);
        if self.limit > 0 && self.deltas.len() > self.limit {
            let excess = self.deltas.len() - self.limit;
            self.deltas.drain(..excess);
            tracing::warn!(
                limit = self.limit,
                evicted = excess,
                "undo history limit reached"
            );
        }
    }

    /// Removes and returns the most recent delta.
    pub fn pop(&mut self) -> Option<Delta> {
        self.deltas.pop()
    }

    pub fn last_command(&self) -> Option<&RepeatableCommand> {
        self.last_command.as_ref()
    }

    pub fn set_last_command(&mut self, cmd: RepeatableCommand) {
        self.last_command = Some(cmd);
    }
}
