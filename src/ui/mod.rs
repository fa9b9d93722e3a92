//! Plain-text rendering of the editor state.
//!
//! The core never prints anything itself. The shell asks this module for the
//! lines to show and writes them wherever it likes.

pub mod help;

use termion::color;

use crate::editor::state::EditorState;

/// Renders the buffer as one output line per document line.
///
/// - With the line cursor visible, the current line is prefixed with `*` and
///   every other line with a space.
/// - With the row cursor visible, the character under the cursor is shown on
///   a green background; at end of line a highlighted space stands in for it.
///
/// # Example
///
/// ```
/// use linequill::editor::buffer::Buffer;
/// use linequill::editor::state::EditorState;
/// use linequill::ui::render_buffer;
///
/// let mut state = EditorState::new(Buffer::from_lines(["one", "two"]));
/// state.execute(";").unwrap();
/// assert_eq!(render_buffer(&state), vec!["*one", " two"]);
/// ```
pub fn render_buffer(state: &EditorState) -> Vec<String> {
    let flags = state.display_flags();
    let cursor = state.cursor();

    state
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let is_current = index == cursor.line;
            let mut out = String::new();

            if flags.line_cursor {
                out.push(if is_current { '*' } else { ' ' });
            }

            if flags.row_cursor && is_current {
                out.push_str(&highlight_column(line, cursor.column));
            } else {
                out.push_str(line);
            }
            out
        })
        .collect()
}

/// Wraps the character at `column` in a highlight.
fn highlight_column(line: &str, column: usize) -> String {
    let before: String = line.chars().take(column).collect();
    let mut rest = line.chars().skip(column);
    let under = rest.next().unwrap_or(' ');
    let after: String = rest.collect();

    format!(
        "{}{}{}{}{}",
        before,
        color::Bg(color::Green),
        under,
        color::Bg(color::Reset),
        after
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::Buffer;
    use crate::editor::cursor::Cursor;

    #[test]
    fn test_plain_render() {
        let state = EditorState::new(Buffer::from_lines(["a", "b"]));
        assert_eq!(render_buffer(&state), vec!["a", "b"]);
    }

    #[test]
    fn test_row_cursor_highlight() {
        let mut state = EditorState::new(Buffer::from_lines(["abc"]));
        state.set_cursor(Cursor::new(0, 1));
        state.execute(".").unwrap();

        let expected = format!("a{}b{}c", color::Bg(color::Green), color::Bg(color::Reset));
        assert_eq!(render_buffer(&state), vec![expected]);
    }

    #[test]
    fn test_row_cursor_at_end_of_line() {
        let mut state = EditorState::new(Buffer::from_lines(["ab"]));
        state.execute("$").unwrap();
        state.execute(".").unwrap();
        state.execute(";").unwrap();

        let expected = format!("*ab{} {}", color::Bg(color::Green), color::Bg(color::Reset));
        assert_eq!(render_buffer(&state), vec![expected]);
    }
}
