//! Tetrimino - the active falling piece
//!
//! A piece is its kind plus 4 absolute cells. Candidates for shifts and
//! rotations are pure coordinate arithmetic; legality is decided by
//! [`Field::vacancy`](crate::Field::vacancy) and the commit methods here only
//! replace the piece's own cells.

use crate::types::{Direction, PieceCells, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetrimino {
    kind: PieceKind,
    cells: PieceCells,
}

impl Tetrimino {
    pub(crate) fn new(kind: PieceKind, cells: PieceCells) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current absolute cells
    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    /// Cells after a one-cell shift. Does not consult the field.
    pub fn candidate_shift(&self, direction: Direction) -> PieceCells {
        let (dr, dc) = direction.delta();
        self.cells.map(|(row, col)| (row + dr, col + dc))
    }

    /// Cells after a clockwise quarter turn about the bounding box's
    /// upper-left corner.
    ///
    /// The turned cells are re-based so their top row never rises above the
    /// piece's current top row; a rotation can therefore never lift a piece
    /// over the stack.
    pub fn candidate_rotate(&self) -> PieceCells {
        let (min_row, min_col) = self.upper_left();

        let mut dest = self
            .cells
            .map(|(row, col)| (min_row - (col - min_col), min_col + (row - min_row)));

        let dest_min_row = dest.iter().map(|&(row, _)| row).min().unwrap_or(min_row);
        if dest_min_row < min_row {
            let lift = min_row - dest_min_row;
            for cell in &mut dest {
                cell.0 += lift;
            }
        }
        dest
    }

    pub fn commit_shift(&mut self, direction: Direction) {
        self.cells = self.candidate_shift(direction);
    }

    pub fn commit_rotate(&mut self) {
        self.cells = self.candidate_rotate();
    }

    fn upper_left(&self) -> (i8, i8) {
        let min_row = self.cells.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let min_col = self.cells.iter().map(|&(_, col)| col).min().unwrap_or(0);
        (min_row, min_col)
    }
}
