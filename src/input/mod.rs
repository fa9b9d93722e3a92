//! Input handling for raw command lines.

pub mod handler;

pub use handler::InputHandler;
