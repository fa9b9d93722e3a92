//! Repeatable command tracking for the `r` command.

/// A mutating command together with its original arguments.
///
/// Repeating re-runs the invocation against the current buffer and cursor,
/// so `DeleteWord` removes whatever word is under the cursor now, not the
/// word that was deleted originally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatableCommand {
    /// Insert text before the cursor (i)
    Insert { text: String },
    /// Insert text after the cursor (a)
    Append { text: String },
    /// Delete the character under the cursor (x)
    DeleteChar,
    /// Delete word plus trailing spaces (dw)
    DeleteWord,
    /// Delete the current line (dd)
    DeleteLine,
    /// Open an empty line below (o)
    OpenBelow,
    /// Open an empty line above (O)
    OpenAbove,
    /// Paste below (p) or above (P)
    Paste { before: bool },
}
