//! Error types for board construction and move validation.

use thiserror::Error;

use crate::board::Cell;

/// Why a placement or pass was rejected.
///
/// Every rejection leaves the board and the position history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinate lies outside the grid.
    #[error("illegal move: ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
    /// Target point already holds a stone.
    #[error("illegal move: ({x}, {y}) is already occupied")]
    OccupiedCell { x: usize, y: usize },
    /// The empty cell state was given where a player was expected.
    #[error("illegal move: empty is not a player")]
    InvalidPlayer,
    /// The placed stone's group has no liberties and nothing was captured.
    #[error("illegal move: suicide at ({x}, {y})")]
    IllegalSuicide { x: usize, y: usize },
    /// The resulting position has already occurred in this game.
    #[error("illegal move: {player} repeats a previous position")]
    KoViolation { player: Cell },
    /// The same player tried to move twice in a row.
    #[error("{player} played out of turn")]
    OutOfTurn { player: Cell },
}

/// Board construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported board size {size} (expected 1..={max})", max = crate::constants::MAX_SIZE)]
    InvalidSize { size: usize },
    #[error("snapshot of a {found}x{found} board cannot restore a {expected}x{expected} board")]
    SnapshotMismatch { expected: usize, found: usize },
}
