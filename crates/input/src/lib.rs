//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and detects
//! the quit keys. Holds no state: key repeat is left to the terminal.

pub mod map;

pub use tetrimino_types as types;

pub use map::{handle_key_event, should_quit};
