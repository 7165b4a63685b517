use thiserror::Error;

use crate::types::PieceKind;

/// Terminal condition: a new piece's spawn cells are already occupied.
///
/// Raised once per game; the driver stops issuing actions when it sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game over: no room to spawn {kind}")]
pub struct GameOver {
    /// The kind that could not be placed
    pub kind: PieceKind,
}
