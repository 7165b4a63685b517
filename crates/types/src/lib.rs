//! Shared types and constants for the tetrimino engine.
//!
//! Everything here is plain data with no I/O, so it can be used by the engine,
//! the terminal view, and the key mapping alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: row 0, shape offsets shifted right by [`SPAWN_COL`]
//!
//! Coordinates are `(row, col)` pairs. Row 0 is the spawn row and the floor
//! is the bottom array bound, not a sentinel row.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 1000 | Gravity interval (one automatic down-shift) |
//!
//! # Examples
//!
//! ```
//! use tetrimino_types::{Direction, GameAction, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let kind: PieceKind = "t".parse().unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert!("x".parse::<PieceKind>().is_err());
//!
//! let action: GameAction = "moveLeft".parse().unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Column offset applied to the shape table when a piece spawns
pub const SPAWN_COL: i8 = 3;

/// Default gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// A `(row, col)` grid coordinate.
///
/// Signed so that candidate positions one step outside the field can be
/// represented and rejected by the vacancy check.
pub type Coord = (i8, i8);

/// The 4 cells of a piece.
pub type PieceCells = [Coord; 4];

/// The seven tetrimino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Single uppercase letter for display and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::T => "T",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the seven kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece kind `{0}` (expected one of I, O, S, Z, J, L, T)")]
pub struct ParsePieceKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    /// Parse a piece kind (case-insensitive)
    ///
    /// ```
    /// use tetrimino_types::PieceKind;
    ///
    /// assert_eq!("i".parse::<PieceKind>(), Ok(PieceKind::I));
    /// assert_eq!("O".parse::<PieceKind>(), Ok(PieceKind::O));
    /// assert!("random".parse::<PieceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "o" => Ok(PieceKind::O),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            "t" => Ok(PieceKind::T),
            _ => Err(ParsePieceKindError(s.to_string())),
        }
    }
}

/// Which piece to spawn next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceChoice {
    /// A specific kind
    Kind(PieceKind),
    /// Uniform pick from the game's piece source
    Random,
}

impl From<PieceKind> for PieceChoice {
    fn from(kind: PieceKind) -> Self {
        PieceChoice::Kind(kind)
    }
}

/// Shift directions. There is no upward shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` delta of a one-cell shift
    pub fn delta(&self) -> Coord {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Player or driver actions applied to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one cell left
    MoveLeft,
    /// Shift piece one cell right
    MoveRight,
    /// Shift piece one cell down (may land it)
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// The shift direction, or `None` for rotation
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Rotate => None,
        }
    }

    /// camelCase name, as written to the session log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

/// Returned when a string does not name a [`GameAction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}`")]
pub struct ParseActionError(pub String);

impl FromStr for GameAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Ok(GameAction::MoveLeft),
            "moveright" | "right" => Ok(GameAction::MoveRight),
            "movedown" | "down" => Ok(GameAction::MoveDown),
            "rotate" => Ok(GameAction::Rotate),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}
