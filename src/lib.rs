//! LineQuill: a line-oriented modal text editor driven by short vim-style
//! commands, with single-step undo and command repeat.

pub mod config;
pub mod editor;
pub mod input;
pub mod ui;
