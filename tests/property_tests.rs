use linequill::editor::buffer::Buffer;
use linequill::editor::state::{EditorState, Outcome};
use proptest::prelude::*;

// Strategy for generating starting documents, including blank and
// whitespace-only lines
fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{0,12}", 0..5)
}

// Strategy for generating raw command lines
fn command_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("h".to_string()),
        Just("j".to_string()),
        Just("k".to_string()),
        Just("l".to_string()),
        Just("^".to_string()),
        Just("$".to_string()),
        Just("w".to_string()),
        Just("b".to_string()),
        Just("x".to_string()),
        Just("dw".to_string()),
        Just("dd".to_string()),
        Just("o".to_string()),
        Just("O".to_string()),
        Just("yy".to_string()),
        Just("p".to_string()),
        Just("P".to_string()),
        Just("u".to_string()),
        Just("r".to_string()),
        Just(".".to_string()),
        Just(";".to_string()),
        Just("s".to_string()),
        "i [a-z ]{1,4}",
        "a [a-z ]{1,4}",
        "[a-z]{2,3}",
    ]
}

fn assert_invariants(state: &EditorState) {
    let buffer = state.buffer();
    let cursor = state.cursor();
    assert!(buffer.line_count() >= 1);
    assert!(cursor.line < buffer.line_count());
    assert!(cursor.column <= buffer.line_len(cursor.line));
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(
        lines in lines_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..40),
    ) {
        let mut state = EditorState::new(Buffer::from_lines(lines));
        assert_invariants(&state);

        for command in &commands {
            let _ = state.execute(command);
            assert_invariants(&state);
        }
    }

    #[test]
    fn undo_restores_state_before_each_edit(
        lines in lines_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..40),
    ) {
        let mut state = EditorState::new(Buffer::from_lines(lines));

        for command in &commands {
            let before_lines = state.lines().to_vec();
            let before_cursor = state.cursor();

            if state.execute(command) == Ok(Outcome::Edited) {
                let mut probe = state.clone();
                prop_assert_eq!(probe.execute("u"), Ok(Outcome::Undone));
                prop_assert_eq!(probe.lines(), before_lines.as_slice());
                prop_assert_eq!(probe.cursor(), before_cursor);
            }
        }
    }

    #[test]
    fn only_edits_grow_history(
        lines in lines_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..40),
    ) {
        let mut state = EditorState::new(Buffer::from_lines(lines));

        for command in &commands {
            let before_len = state.history().len();
            let before_target = state.last_command().cloned();

            match state.execute(command) {
                Ok(Outcome::Edited) => prop_assert_eq!(state.history().len(), before_len + 1),
                Ok(Outcome::Undone) => prop_assert_eq!(state.history().len() + 1, before_len),
                _ => {
                    prop_assert_eq!(state.history().len(), before_len);
                    prop_assert_eq!(state.last_command().cloned(), before_target);
                }
            }
        }
    }
}
