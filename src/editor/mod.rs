//! Buffer, cursor and command engine.
//!
//! This module provides the core editor functionality: the line buffer, the
//! cursor model, the clipboard register, the undo history and the command
//! interpreter that ties them together.
//!
//! # Modules
//!
//! - `buffer`: Line storage
//! - `cursor`: Cursor position and clamping
//! - `motion`: Word motions and the `dw` span
//! - `registers`: Single-slot clipboard
//! - `undo`: Inverse deltas and the command stack
//! - `repeat`: Repeatable command invocations
//! - `command`: Command parsing
//! - `error`: User-facing error taxonomy
//! - `state`: The editing session and interpreter
//!
//! # Example
//!
//! ```
//! use linequill::editor::state::EditorState;
//!
//! let mut state = EditorState::default();
//! state.execute("i hello").unwrap();
//! assert_eq!(state.lines(), &["hello"]);
//! ```

pub mod buffer;
pub mod command;
pub mod cursor;
pub mod error;
pub mod motion;
pub mod registers;
pub mod repeat;
pub mod state;
pub mod undo;
