//! Core engine - field, tetrimino and the spawn/move/land/clear loop
//!
//! This crate holds all the game rules. It has no dependencies on terminal
//! I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable from plain function calls
//! - **Bounded**: every operation touches at most the 200 grid cells
//!
//! # Module Structure
//!
//! - [`field`]: 20x10 occupancy grid, vacancy checks, row clearing, spawn
//! - [`shapes`]: constant shape table for the seven kinds
//! - [`tetrimino`]: the active piece and its shift/rotation candidates
//! - [`rng`]: seedable uniform piece source
//! - [`game`]: check-then-act orchestration and landing
//! - [`snapshot`]: read-only view for renderers
//!
//! # Rules
//!
//! - Pieces spawn in the top row; a blocked spawn ends the game
//! - Rotation is a clockwise quarter turn about the piece's upper-left
//!   corner, never lifting the piece above its current top row
//! - A piece lands as soon as it cannot move further down; full rows are
//!   then cleared and the next piece spawns
//!
//! # Example
//!
//! ```
//! use tetrimino_core::{Game, StepOutcome};
//! use tetrimino_core::types::{GameAction, PieceChoice, PieceKind};
//!
//! let mut game = Game::new(12345);
//! game.spawn_next(PieceChoice::Kind(PieceKind::I)).unwrap();
//!
//! assert_eq!(game.apply(GameAction::MoveLeft), Ok(StepOutcome::Moved));
//! assert_eq!(game.apply(GameAction::Rotate), Ok(StepOutcome::Moved));
//!
//! // Gravity until the piece lands.
//! while game.tick().unwrap() == StepOutcome::Moved {}
//! assert_eq!(game.pieces_spawned(), 2);
//! ```

pub mod error;
pub mod field;
pub mod game;
pub mod rng;
pub mod shapes;
pub mod snapshot;
pub mod tetrimino;

pub use tetrimino_types as types;

// Re-export commonly used types for convenience
pub use error::GameOver;
pub use field::{ClearedRows, Field, Row};
pub use game::{Game, StepOutcome};
pub use rng::PieceSource;
pub use shapes::{get_shape, spawn_cells};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetrimino::Tetrimino;
