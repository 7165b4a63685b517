//! Terminal tetrimino game (workspace facade crate).
//!
//! Re-exports the member crates as `tui_tetrimino::{core, input, term, types}`
//! and holds the pieces only the binary needs: command-line configuration and
//! file logging.

pub mod config;
pub mod logging;

pub use tetrimino_core as core;
pub use tetrimino_input as input;
pub use tetrimino_term as term;
pub use tetrimino_types as types;
