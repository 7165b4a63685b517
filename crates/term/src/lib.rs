//! Terminal rendering for the tetrimino game.
//!
//! Rendering is split in two:
//! - [`GameView`] turns a core [`GameSnapshot`](crate::core::GameSnapshot)
//!   into a [`FrameBuffer`] without any I/O
//! - [`TerminalRenderer`] flushes framebuffers to the terminal via crossterm,
//!   rewriting only the cells that changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrimino_core as core;
pub use tetrimino_types as types;

pub use fb::{Cell, FrameBuffer, Ink};
pub use game_view::{GameView, Viewport, BLOCK_CHAR, EMPTY_CHAR, FRAME_CHAR};
pub use renderer::{changed_runs, encode_full_into, encode_runs_into, TerminalRenderer};
