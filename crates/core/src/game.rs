//! Game module - the spawn / move / land / clear loop
//!
//! [`Game`] owns the field, the active piece and the piece source. Every
//! shift and rotation follows the same check-then-act protocol: ask the piece
//! for a candidate, ask the field whether it is vacant, then commit to the
//! grid and the piece together. Nothing changes when the check fails.
//!
//! After each downward attempt (player input or gravity tick) the field is
//! asked whether the piece has landed. A landed piece is settled: full rows
//! are cleared and a random piece is spawned, which may end the game.

use log::{debug, info, trace};

use crate::error::GameOver;
use crate::field::{ClearedRows, Field};
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetrimino::Tetrimino;
use crate::types::{Direction, GameAction, PieceChoice};

/// Result of one action or tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved or rotated
    Moved,
    /// The move was illegal; nothing changed
    Blocked,
    /// The piece landed; `cleared` lists the removed rows (ascending) and a
    /// new piece is active
    Landed { cleared: ClearedRows },
    /// The game is over; the action was ignored
    Finished,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    active: Option<Tetrimino>,
    source: PieceSource,
    over: Option<GameOver>,
    pieces_spawned: u32,
}

impl Game {
    /// Create a new game on an empty field with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_source(PieceSource::new(seed))
    }

    pub fn with_source(source: PieceSource) -> Self {
        Self::from_field(Field::new(), source)
    }

    /// Start from an existing grid; every occupied cell counts as settled
    pub fn from_field(field: Field, source: PieceSource) -> Self {
        Self {
            field,
            active: None,
            source,
            over: None,
            pieces_spawned: 0,
        }
    }

    /// Spawn the first random piece. Does nothing once a piece is active.
    pub fn start(&mut self) -> Result<(), GameOver> {
        if self.active.is_some() {
            return Ok(());
        }
        info!("game started (seed {})", self.source.seed());
        self.spawn_next(PieceChoice::Random)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<&Tetrimino> {
        self.active.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.over.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Spawn a new active piece.
    ///
    /// A piece that is still active stays on the grid as settled blocks.
    /// Fails with [`GameOver`] when the spawn cells are occupied, which ends
    /// the game. Only that failing spawn produces the condition: once the
    /// game is over no further spawn is attempted, nothing is logged or
    /// changed, and this returns the stored [`GameOver`] (the kind that
    /// failed originally, whatever `choice` is) so a caller never mistakes a
    /// finished game for a fresh piece. `apply` and `tick` report
    /// [`StepOutcome::Finished`] instead.
    pub fn spawn_next(&mut self, choice: PieceChoice) -> Result<(), GameOver> {
        if let Some(over) = self.over {
            return Err(over);
        }

        let spawned = match choice {
            PieceChoice::Kind(kind) => self.field.spawn(kind),
            PieceChoice::Random => self.field.spawn_random(&mut self.source),
        };

        match spawned {
            Ok(piece) => {
                self.active = Some(piece);
                self.pieces_spawned += 1;
                Ok(())
            }
            Err(over) => {
                info!("{} after {} pieces", over, self.pieces_spawned);
                debug!("final field:\n{}", self.field);
                self.active = None;
                self.over = Some(over);
                Err(over)
            }
        }
    }

    /// Shift the active piece one cell. Returns false if blocked.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let dest = piece.candidate_shift(direction);
        if !self.field.vacancy(piece.cells(), &dest) {
            return false;
        }
        self.field.commit(piece.cells(), &dest);
        piece.commit_shift(direction);
        true
    }

    /// Rotate the active piece clockwise. Returns false if blocked.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let dest = piece.candidate_rotate();
        if !self.field.vacancy(piece.cells(), &dest) {
            return false;
        }
        self.field.commit(piece.cells(), &dest);
        piece.commit_rotate();
        true
    }

    /// Whether the active piece can no longer move down
    pub fn landed(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|piece| self.field.landed(piece))
    }

    /// Apply a player action
    pub fn apply(&mut self, action: GameAction) -> Result<StepOutcome, GameOver> {
        if self.over.is_some() {
            return Ok(StepOutcome::Finished);
        }

        match action.direction() {
            Some(Direction::Down) => self.step_down(),
            Some(direction) => Ok(moved_or_blocked(self.shift(direction))),
            None => Ok(moved_or_blocked(self.rotate())),
        }
    }

    /// Gravity: one automatic down-shift
    pub fn tick(&mut self) -> Result<StepOutcome, GameOver> {
        if self.over.is_some() {
            return Ok(StepOutcome::Finished);
        }
        trace!("gravity tick");
        self.step_down()
    }

    fn step_down(&mut self) -> Result<StepOutcome, GameOver> {
        let moved = self.shift(Direction::Down);
        if !self.landed() {
            return Ok(moved_or_blocked(moved));
        }
        let cleared = self.settle()?;
        Ok(StepOutcome::Landed { cleared })
    }

    /// Fix the landed piece in place, clear full rows and spawn the next one
    fn settle(&mut self) -> Result<ClearedRows, GameOver> {
        if let Some(piece) = self.active.take() {
            debug!("{} landed at {:?}", piece.kind(), piece.cells());
        }
        let cleared = self.field.clear_rows();
        self.spawn_next(PieceChoice::Random)?;
        Ok(cleared)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.field.rows();
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.game_over = self.over.is_some();
        out.seed = self.source.seed();
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

fn moved_or_blocked(moved: bool) -> StepOutcome {
    if moved {
        StepOutcome::Moved
    } else {
        StepOutcome::Blocked
    }
}
