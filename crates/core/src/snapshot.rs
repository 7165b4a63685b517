//! Snapshot module - copyable read-only view of a game for renderers

use crate::field::Row;
use crate::tetrimino::Tetrimino;
use crate::types::{PieceCells, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: PieceCells,
}

impl From<&Tetrimino> for ActiveSnapshot {
    fn from(value: &Tetrimino) -> Self {
        Self {
            kind: value.kind(),
            cells: *value.cells(),
        }
    }
}

/// Read-only view of a game for rendering.
///
/// `rows` is the whole grid, top row first, and already includes the active
/// piece's cells; `active` tells which of them are still falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: [Row; FIELD_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub seed: u64,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Whether `(row, col)` belongs to the falling piece
    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        self.active.is_some_and(|a| {
            a.cells
                .iter()
                .any(|&(r, c)| r >= 0 && c >= 0 && r as usize == row && c as usize == col)
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: [[false; FIELD_WIDTH]; FIELD_HEIGHT],
            active: None,
            game_over: false,
            seed: 0,
            pieces_spawned: 0,
        }
    }
}
