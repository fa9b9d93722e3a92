//! Error types for command parsing and execution.

use std::fmt;

/// User-triggerable failures. None of them change editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The command token is not recognized.
    UnknownCommand(String),
    /// A command that takes text was given none.
    MissingArgument(char),
    /// Inserted text contains a line break.
    LineBreakInText(char),
    /// `u` with an empty history.
    NothingToUndo,
    /// `r` before any mutating command ran.
    NothingToRepeat,
    /// `x` or `dw` with nothing under the cursor.
    NothingToDelete,
}

impl EditError {
    /// True for parse failures, false for precondition failures.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EditError::UnknownCommand(_)
                | EditError::MissingArgument(_)
                | EditError::LineBreakInText(_)
        )
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::UnknownCommand(token) => write!(f, "Unknown command '{}'", token),
            EditError::MissingArgument(cmd) => {
                write!(f, "Command '{}' requires text, e.g. '{} hello'", cmd, cmd)
            }
            EditError::LineBreakInText(cmd) => {
                write!(f, "Text for '{}' must fit on a single line", cmd)
            }
            EditError::NothingToUndo => write!(f, "Nothing to undo"),
            EditError::NothingToRepeat => write!(f, "No command to repeat"),
            EditError::NothingToDelete => write!(f, "Nothing to delete at cursor"),
        }
    }
}

impl std::error::Error for EditError {}
