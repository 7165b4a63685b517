//! Field module - the occupancy grid
//!
//! The field is a 20x10 grid of booleans (`true` = occupied) stored in a flat,
//! row-major array. Row 0 is the spawn row at the top; the floor is the array
//! bound. Coordinates are `(row, col)`.
//!
//! All legality questions go through [`Field::vacancy`]: a piece's current
//! cells are treated as empty and every destination cell must be in bounds
//! and unoccupied. Mutation goes through [`Field::commit`] (after a
//! successful vacancy check) and [`Field::clear_rows`].

use std::fmt;

use arrayvec::ArrayVec;
use log::debug;

use crate::error::GameOver;
use crate::rng::PieceSource;
use crate::shapes::spawn_cells;
use crate::tetrimino::Tetrimino;
use crate::types::{Coord, Direction, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// Rows removed by one [`Field::clear_rows`] pass, ascending
pub type ClearedRows = ArrayVec<usize, FIELD_HEIGHT>;

/// One row of occupancy flags, left to right
pub type Row = [bool; FIELD_WIDTH];

/// The game field - 20 rows x 10 columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [bool; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [false; FIELD_SIZE],
        }
    }

    /// Build a field from a full row table (top row first)
    pub fn from_rows(rows: [Row; FIELD_HEIGHT]) -> Self {
        let mut field = Self::new();
        for (row, values) in rows.iter().enumerate() {
            let start = row * FIELD_WIDTH;
            field.cells[start..start + FIELD_WIDTH].copy_from_slice(values);
        }
        field
    }

    /// Calculate flat index from `(row, col)`, `None` when out of bounds
    #[inline(always)]
    fn index((row, col): Coord) -> Option<usize> {
        if row < 0 || row >= FIELD_HEIGHT as i8 || col < 0 || col >= FIELD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * FIELD_WIDTH + (col as usize))
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Check if `(row, col)` is occupied. Out of bounds is never occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        Self::index((row, col)).is_some_and(|idx| self.cells[idx])
    }

    /// Check if a coordinate lies inside the field
    pub fn in_bounds(&self, coord: Coord) -> bool {
        Self::index(coord).is_some()
    }

    /// Report whether a piece could occupy `dest` if `query` were vacated.
    ///
    /// `query` is the piece's current cells; they are treated as empty so a
    /// piece never collides with itself. Any destination cell out of bounds
    /// makes the answer `false`.
    pub fn vacancy(&self, query: &[Coord], dest: &[Coord]) -> bool {
        dest.iter().all(|&coord| match Self::index(coord) {
            None => false,
            Some(idx) => !self.cells[idx] || query.contains(&coord),
        })
    }

    /// Vacate `old` and occupy `new`.
    ///
    /// Callers must have checked `vacancy(old, new)` first; nothing is
    /// re-validated here. Out-of-bounds coordinates are skipped.
    pub fn commit(&mut self, old: &[Coord], new: &[Coord]) {
        for idx in old.iter().filter_map(|&c| Self::index(c)) {
            self.cells[idx] = false;
        }
        for idx in new.iter().filter_map(|&c| Self::index(c)) {
            self.cells[idx] = true;
        }
    }

    /// Place a new piece of `kind` at its spawn cells.
    ///
    /// Fails with [`GameOver`] if any spawn cell is already occupied; the
    /// field is left untouched in that case.
    pub fn spawn(&mut self, kind: PieceKind) -> Result<Tetrimino, GameOver> {
        let cells = spawn_cells(kind);
        if !self.vacancy(&[], &cells) {
            debug!("spawn of {} blocked at {:?}", kind, cells);
            return Err(GameOver { kind });
        }
        self.commit(&[], &cells);
        debug!("spawned {} at {:?}", kind, cells);
        Ok(Tetrimino::new(kind, cells))
    }

    /// Spawn a uniformly random kind drawn from `source`
    pub fn spawn_random(&mut self, source: &mut PieceSource) -> Result<Tetrimino, GameOver> {
        let kind = source.next_kind();
        self.spawn(kind)
    }

    /// Check if the piece can no longer move down
    pub fn landed(&self, piece: &Tetrimino) -> bool {
        !self.vacancy(piece.cells(), &piece.candidate_shift(Direction::Down))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT {
            return false;
        }
        let start = row * FIELD_WIDTH;
        self.cells[start..start + FIELD_WIDTH].iter().all(|&c| c)
    }

    /// Remove one row, shift every row strictly above it down by one and
    /// blank the top row
    fn remove_row(&mut self, row: usize) {
        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * FIELD_WIDTH;
            self.cells.copy_within(src..src + FIELD_WIDTH, r * FIELD_WIDTH);
        }
        self.cells[..FIELD_WIDTH].fill(false);
    }

    /// Clear all full rows and return their indices in ascending order.
    ///
    /// Rows are scanned top to bottom and removed as they are found. Removing
    /// a row only moves the rows above it, so the rows still to be scanned
    /// keep their indices and every reported index refers to the grid as it
    /// was before the call.
    pub fn clear_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..FIELD_HEIGHT {
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared.push(row);
            }
        }
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.as_slice());
        }
        cleared
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= FIELD_HEIGHT {
            return None;
        }
        let start = row * FIELD_WIDTH;
        Some(&self.cells[start..start + FIELD_WIDTH])
    }

    /// Read-only copy of the grid, top row first
    pub fn rows(&self) -> [Row; FIELD_HEIGHT] {
        let mut out = [[false; FIELD_WIDTH]; FIELD_HEIGHT];
        for (row, chunk) in self.cells.chunks_exact(FIELD_WIDTH).enumerate() {
            out[row].copy_from_slice(chunk);
        }
        out
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text dump: `@` frame, `*` occupied, space empty.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = "@".repeat(FIELD_WIDTH + 2);
        writeln!(f, "{edge}")?;
        for chunk in self.cells.chunks_exact(FIELD_WIDTH) {
            f.write_str("@")?;
            for &occupied in chunk {
                f.write_str(if occupied { "*" } else { " " })?;
            }
            writeln!(f, "@")?;
        }
        writeln!(f, "{edge}")
    }
}
