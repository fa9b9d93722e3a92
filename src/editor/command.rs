//! Command parsing.
//!
//! A raw command is a token optionally followed by a single space and free
//! text. Only `i` and `a` take text; every other command is a fixed one- or
//! two-character token.

use super::error::EditError;
use super::repeat::RepeatableCommand;

/// High-level commands parsed from a raw command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show help (?)
    Help,
    /// Toggle row cursor highlighting (.)
    ToggleRowCursor,
    /// Toggle line cursor marker (;)
    ToggleLineCursor,
    /// Move cursor left (h)
    MoveLeft,
    /// Move cursor down (k)
    MoveDown,
    /// Move cursor up (j)
    MoveUp,
    /// Move cursor right (l)
    MoveRight,
    /// Move to start of line (^)
    LineStart,
    /// Move to end of line ($)
    LineEnd,
    /// Move to next word start (w)
    NextWord,
    /// Move to previous word start (b)
    PrevWord,
    /// Copy the current line (yy)
    Yank,
    /// Undo the last change (u)
    Undo,
    /// Repeat the last change (r)
    Repeat,
    /// Render the buffer (s)
    Show,
    /// Quit (q)
    Quit,
    /// Any buffer-mutating command
    Edit(RepeatableCommand),
}

impl Command {
    /// True if the command changes the buffer when it succeeds.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Edit(_))
    }
}

/// Parses a raw command line (trailing newline already removed).
///
/// # Examples
///
/// ```
/// use linequill::editor::command::{parse_command, Command};
/// use linequill::editor::repeat::RepeatableCommand;
///
/// assert_eq!(parse_command("dd"), Ok(Command::Edit(RepeatableCommand::DeleteLine)));
/// assert_eq!(
///     parse_command("i hello"),
///     Ok(Command::Edit(RepeatableCommand::Insert { text: "hello".to_string() }))
/// );
/// assert!(parse_command("zz").is_err());
/// ```
pub fn parse_command(raw: &str) -> Result<Command, EditError> {
    let (token, arg) = match raw.split_once(' ') {
        Some((token, arg)) => (token, Some(arg)),
        None => (raw, None),
    };

    // A buffer line never holds a line break.
    let has_break = arg.is_some_and(|text| text.contains(['\n', '\r']));

    let command = match (token, arg) {
        ("i", Some(_)) if has_break => return Err(EditError::LineBreakInText('i')),
        ("a", Some(_)) if has_break => return Err(EditError::LineBreakInText('a')),
        ("i", Some(text)) if !text.is_empty() => Command::Edit(RepeatableCommand::Insert {
            text: text.to_string(),
        }),
        ("a", Some(text)) if !text.is_empty() => Command::Edit(RepeatableCommand::Append {
            text: text.to_string(),
        }),
        ("i", _) => return Err(EditError::MissingArgument('i')),
        ("a", _) => return Err(EditError::MissingArgument('a')),
        (_, Some(_)) => return Err(EditError::UnknownCommand(raw.to_string())),
        ("?", None) => Command::Help,
        (".", None) => Command::ToggleRowCursor,
        (";", None) => Command::ToggleLineCursor,
        ("h", None) => Command::MoveLeft,
        ("j", None) => Command::MoveUp,
        ("k", None) => Command::MoveDown,
        ("l", None) => Command::MoveRight,
        ("^", None) => Command::LineStart,
        ("$", None) => Command::LineEnd,
        ("w", None) => Command::NextWord,
        ("b", None) => Command::PrevWord,
        ("x", None) => Command::Edit(RepeatableCommand::DeleteChar),
        ("dw", None) => Command::Edit(RepeatableCommand::DeleteWord),
        ("dd", None) => Command::Edit(RepeatableCommand::DeleteLine),
        ("o", None) => Command::Edit(RepeatableCommand::OpenBelow),
        ("O", None) => Command::Edit(RepeatableCommand::OpenAbove),
        ("yy", None) => Command::Yank,
        ("p", None) => Command::Edit(RepeatableCommand::Paste { before: false }),
        ("P", None) => Command::Edit(RepeatableCommand::Paste { before: true }),
        ("u", None) => Command::Undo,
        ("r", None) => Command::Repeat,
        ("s", None) => Command::Show,
        ("q", None) => Command::Quit,
        _ => return Err(EditError::UnknownCommand(raw.to_string())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_tokens() {
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("yy"), Ok(Command::Yank));
        assert_eq!(parse_command("u"), Ok(Command::Undo));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(
            parse_command("P"),
            Ok(Command::Edit(RepeatableCommand::Paste { before: true }))
        );
    }

    #[test]
    fn test_parse_text_keeps_inner_spaces() {
        assert_eq!(
            parse_command("a  two words "),
            Ok(Command::Edit(RepeatableCommand::Append {
                text: " two words ".to_string()
            }))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(parse_command("i"), Err(EditError::MissingArgument('i')));
        assert_eq!(parse_command("a "), Err(EditError::MissingArgument('a')));
    }

    #[test]
    fn test_parse_rejects_line_breaks_in_text() {
        assert_eq!(parse_command("i a\nb"), Err(EditError::LineBreakInText('i')));
        assert_eq!(parse_command("a a\r"), Err(EditError::LineBreakInText('a')));
        assert!(parse_command("i a\nb").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("ihello"),
            Err(EditError::UnknownCommand("ihello".to_string()))
        );
        assert_eq!(
            parse_command("dd now"),
            Err(EditError::UnknownCommand("dd now".to_string()))
        );
        assert!(parse_command("").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_only_edits_are_mutating() {
        assert!(parse_command("x").unwrap().is_mutating());
        assert!(!parse_command("yy").unwrap().is_mutating());
        assert!(!parse_command("u").unwrap().is_mutating());
    }
}
