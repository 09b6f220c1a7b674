//! Move application: captures, suicide rejection and superko.
//!
//! [`MoveEngine`] owns the board and the position history of one game. A
//! move is applied to the board directly; if it turns out to be illegal the
//! board is restored from a snapshot taken before the stone was placed, so a
//! rejected move never leaves a trace.
//!
//! The engine checks structural legality only. Turn order belongs to the
//! session layer (see [`Game`](crate::game::Game)).

use log::debug;

use crate::board::{Board, Cell, Point, Snapshot};
use crate::error::{BoardError, MoveError};
use crate::group::{group, liberties};
use crate::history::PositionHistory;

/// Result of an accepted placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponent stones removed by the move.
    pub captured: Vec<Point>,
}

impl MoveOutcome {
    pub fn captures(&self) -> usize {
        self.captured.len()
    }
}

/// Board plus history for a single game.
#[derive(Clone, Debug)]
pub struct MoveEngine {
    board: Board,
    history: PositionHistory,
}

impl MoveEngine {
    /// Start a game on an empty board of side `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Start a game from an arbitrary position.
    ///
    /// The history is seeded with that position only.
    pub fn from_board(board: Board) -> Self {
        let mut history = PositionHistory::new();
        history.record(board.fingerprint());
        Self { board, history }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    /// Place a stone for `player` at `(x, y)`.
    ///
    /// Adjacent opponent groups left without liberties are removed before the
    /// placed stone's own liberties are examined, so a move that captures is
    /// never suicide.
    ///
    /// # Errors
    /// - [`MoveError::InvalidPlayer`] if `player` is [`Cell::Empty`]
    /// - [`MoveError::OutOfBounds`] if the point is off the board
    /// - [`MoveError::OccupiedCell`] if the point holds a stone
    /// - [`MoveError::IllegalSuicide`] if the stone would have no liberties
    ///   and captured nothing
    /// - [`MoveError::KoViolation`] if the resulting position occurred before
    pub fn apply_move(
        &mut self,
        player: Cell,
        x: usize,
        y: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let opponent = player.opponent().ok_or(MoveError::InvalidPlayer)?;
        if self.board.get(x, y)? != Cell::Empty {
            return Err(MoveError::OccupiedCell { x, y });
        }

        let snapshot = self.board.snapshot();
        self.board.set(x, y, player)?;

        let mut captured = Vec::new();
        for n in self.board.neighbors((x, y)) {
            // A group touching the stone twice is already gone on the second visit
            if self.board.at(n) != opponent {
                continue;
            }
            let dead = group(&self.board, n.0, n.1);
            if liberties(&self.board, &dead) == 0 {
                for &pt in &dead {
                    self.board.clear(pt);
                }
                captured.extend(dead);
            }
        }

        // Once something was captured the move stands, even if the placed
        // group still shows zero liberties.
        if captured.is_empty() && liberties(&self.board, &group(&self.board, x, y)) == 0 {
            self.rollback(snapshot);
            return Err(MoveError::IllegalSuicide { x, y });
        }

        let fingerprint = self.board.fingerprint();
        if self.history.contains(&fingerprint) {
            self.rollback(snapshot);
            return Err(MoveError::KoViolation { player });
        }
        self.history.record(fingerprint);

        debug!("{player} plays ({x}, {y}), captures {}", captured.len());
        Ok(MoveOutcome { captured })
    }

    fn rollback(&mut self, snapshot: Snapshot) {
        let restored = self.board.restore(snapshot);
        debug_assert!(restored.is_ok(), "snapshot taken from this engine's board");
    }

    /// Record a pass for `player`. The board is not changed.
    ///
    /// # Errors
    /// - [`MoveError::InvalidPlayer`] if `player` is [`Cell::Empty`]
    /// - [`MoveError::KoViolation`] if `player` already passed on this exact
    ///   position
    pub fn apply_pass(&mut self, player: Cell) -> Result<(), MoveError> {
        if !player.is_stone() {
            return Err(MoveError::InvalidPlayer);
        }
        let fingerprint = self.board.fingerprint().with_pass(player);
        if self.history.contains(&fingerprint) {
            return Err(MoveError::KoViolation { player });
        }
        self.history.record(fingerprint);
        debug!("{player} passes");
        Ok(())
    }
}
