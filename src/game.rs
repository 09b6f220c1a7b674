//! A game session: turn order and end-of-game detection on top of the engine.

use log::{debug, info};

use crate::board::{Board, Cell};
use crate::engine::{MoveEngine, MoveOutcome};
use crate::error::{BoardError, MoveError};
use crate::score::{score, Score};

/// A decoded move command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place { player: Cell, x: usize, y: usize },
    Pass { player: Cell },
}

impl Command {
    pub fn player(&self) -> Cell {
        match *self {
            Command::Place { player, .. } | Command::Pass { player } => player,
        }
    }
}

/// One game in progress.
///
/// Black moves first. Only accepted commands advance the turn.
#[derive(Clone, Debug)]
pub struct Game {
    engine: MoveEngine,
    /// Player of the last accepted command
    last_player: Cell,
    consecutive_passes: u32,
    /// Accepted commands so far
    moves: usize,
    black_prisoners: usize,
    white_prisoners: usize,
}

impl Game {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            engine: MoveEngine::new(size)?,
            last_player: Cell::White,
            consecutive_passes: 0,
            moves: 0,
            black_prisoners: 0,
            white_prisoners: 0,
        })
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    /// The player expected to move next.
    pub fn to_move(&self) -> Cell {
        self.last_player.opponent().unwrap_or(Cell::Black)
    }

    pub fn move_number(&self) -> usize {
        self.moves
    }

    /// Stones of the opposite color captured by `player`.
    pub fn prisoners(&self, player: Cell) -> usize {
        match player {
            Cell::Black => self.black_prisoners,
            Cell::White => self.white_prisoners,
            Cell::Empty => 0,
        }
    }

    /// True once two passes in a row have been accepted.
    pub fn is_finished(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Apply one command.
    ///
    /// # Errors
    /// [`MoveError::OutOfTurn`] if `command` belongs to the player who moved
    /// last, otherwise whatever the engine rejects the move with.
    pub fn play(&mut self, command: Command) -> Result<MoveOutcome, MoveError> {
        let player = command.player();
        if player == self.last_player {
            return Err(MoveError::OutOfTurn { player });
        }

        let outcome = match command {
            Command::Place { player, x, y } => {
                let outcome = self.engine.apply_move(player, x, y)?;
                match player {
                    Cell::Black => self.black_prisoners += outcome.captures(),
                    _ => self.white_prisoners += outcome.captures(),
                }
                self.consecutive_passes = 0;
                outcome
            }
            Command::Pass { player } => {
                self.engine.apply_pass(player)?;
                self.consecutive_passes += 1;
                MoveOutcome::default()
            }
        };

        self.last_player = player;
        self.moves += 1;
        debug!("move {} accepted: {:?}", self.moves, command);
        if self.is_finished() {
            info!("game over after {} moves: two consecutive passes", self.moves);
        }
        Ok(outcome)
    }

    /// Area score of the current board.
    pub fn score(&self) -> Score {
        score(self.engine.board())
    }
}
