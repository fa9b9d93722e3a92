use linequill::editor::buffer::Buffer;
use linequill::editor::cursor::Cursor;
use linequill::editor::state::EditorState;

fn state_with(lines: &[&str]) -> EditorState {
    EditorState::new(Buffer::from_lines(lines.iter().copied()))
}

fn run(state: &mut EditorState, command: &str) -> Cursor {
    state.execute(command).unwrap();
    state.cursor()
}

#[test]
fn test_next_word_crosses_lines() {
    let mut state = state_with(&["ab cd", "ef"]);

    assert_eq!(run(&mut state, "w"), Cursor::new(0, 3));
    assert_eq!(run(&mut state, "w"), Cursor::new(1, 0));
    assert_eq!(run(&mut state, "w"), Cursor::new(1, 2));
    assert_eq!(run(&mut state, "w"), Cursor::new(1, 2));
}

#[test]
fn test_prev_word_crosses_lines() {
    let mut state = state_with(&["ab cd", "ef"]);
    state.set_cursor(Cursor::new(1, 2));

    assert_eq!(run(&mut state, "b"), Cursor::new(1, 0));
    assert_eq!(run(&mut state, "b"), Cursor::new(0, 3));
    assert_eq!(run(&mut state, "b"), Cursor::new(0, 0));
    assert_eq!(run(&mut state, "b"), Cursor::new(0, 0));
}

#[test]
fn test_prev_word_onto_blank_line() {
    let mut state = state_with(&["   ", "x"]);
    state.set_cursor(Cursor::new(1, 0));

    assert_eq!(run(&mut state, "b"), Cursor::new(0, 0));
}

#[test]
fn test_word_motion_from_whitespace() {
    let mut state = state_with(&["ab   cd"]);
    state.set_cursor(Cursor::new(0, 3));

    assert_eq!(run(&mut state, "w"), Cursor::new(0, 5));
    state.set_cursor(Cursor::new(0, 3));
    assert_eq!(run(&mut state, "b"), Cursor::new(0, 0));
}

#[test]
fn test_horizontal_motion_clamps() {
    let mut state = state_with(&["ab", "cd"]);

    assert_eq!(run(&mut state, "h"), Cursor::new(0, 0));
    assert_eq!(run(&mut state, "l"), Cursor::new(0, 1));
    assert_eq!(run(&mut state, "l"), Cursor::new(0, 2));
    assert_eq!(run(&mut state, "l"), Cursor::new(0, 2));
}

#[test]
fn test_vertical_motion_clamps() {
    let mut state = state_with(&["long line", "ab", "longer line"]);
    state.set_cursor(Cursor::new(0, 7));

    assert_eq!(run(&mut state, "j"), Cursor::new(0, 7));
    assert_eq!(run(&mut state, "k"), Cursor::new(1, 2));
    assert_eq!(run(&mut state, "k"), Cursor::new(2, 2));
    assert_eq!(run(&mut state, "k"), Cursor::new(2, 2));
}

#[test]
fn test_j_moves_up_and_k_moves_down() {
    let mut state = state_with(&["top", "mid", "bot"]);
    state.set_cursor(Cursor::new(1, 0));

    assert_eq!(run(&mut state, "j"), Cursor::new(0, 0));
    assert_eq!(run(&mut state, "k"), Cursor::new(1, 0));
    assert_eq!(run(&mut state, "k"), Cursor::new(2, 0));
}

#[test]
fn test_line_start_and_end() {
    let mut state = state_with(&["hello"]);

    assert_eq!(run(&mut state, "$"), Cursor::new(0, 5));
    assert_eq!(run(&mut state, "^"), Cursor::new(0, 0));
}

#[test]
fn test_motions_are_not_recorded() {
    let mut state = state_with(&["a b", "c"]);

    for command in ["w", "b", "j", "k", "l", "h", "$", "^"] {
        state.execute(command).unwrap();
    }

    assert!(state.history().is_empty());
    assert!(state.last_command().is_none());
}
