//! Shape table - canonical cell offsets for each tetrimino kind
//!
//! Offsets are `(row, col)` relative to an implicit origin at the upper-left
//! of the piece. The table is constant; spawn placement is derived from it by
//! translating every offset by `(0, SPAWN_COL)`.

use crate::types::{PieceCells, PieceKind, SPAWN_COL};

/// Offsets of the 4 cells of a kind
pub type PieceShape = [(i8, i8); 4];

const I_SHAPE: PieceShape = [(0, 0), (0, 1), (0, 2), (0, 3)];
const O_SHAPE: PieceShape = [(0, 0), (0, 1), (1, 0), (1, 1)];
const S_SHAPE: PieceShape = [(0, 1), (0, 2), (1, 0), (1, 1)];
const Z_SHAPE: PieceShape = [(0, 0), (0, 1), (1, 1), (1, 2)];
const J_SHAPE: PieceShape = [(0, 0), (1, 0), (1, 1), (1, 2)];
const L_SHAPE: PieceShape = [(0, 0), (0, 1), (0, 2), (1, 0)];
const T_SHAPE: PieceShape = [(0, 0), (0, 1), (0, 2), (1, 1)];

/// Get the canonical offsets for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::T => T_SHAPE,
    }
}

/// Absolute cells of a freshly spawned piece.
///
/// Builds a new array on every call.
pub fn spawn_cells(kind: PieceKind) -> PieceCells {
    get_shape(kind).map(|(row, col)| (row, col + SPAWN_COL))
}
