//! igo-rules: a Go rule engine.
//!
//! This crate applies alternating stone placements and passes to a square
//! board and enforces the rules of Go: bounds, occupancy, captures, the
//! suicide prohibition and positional superko. Finished games are scored
//! with area scoring.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and rendering glyphs
//! - [`board`] - Board state, snapshots and fingerprints
//! - [`group`] - Connected groups and liberties
//! - [`history`] - Fingerprints of every position seen
//! - [`engine`] - Move application with rollback on illegal moves
//! - [`score`] - Area scoring
//! - [`game`] - Turn order and end-of-game detection
//! - [`notation`] - Decoding of `B D4` style commands
//!
//! ## Example
//!
//! ```
//! use igo_rules::board::Cell;
//! use igo_rules::game::{Command, Game};
//!
//! let mut game = Game::new(19).unwrap();
//! game.play(Command::Place { player: Cell::Black, x: 3, y: 3 }).unwrap();
//! game.play(Command::Pass { player: Cell::White }).unwrap();
//! game.play(Command::Pass { player: Cell::Black }).unwrap();
//!
//! assert!(game.is_finished());
//! println!("{}", game.board());
//! println!("{}", game.score());
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod group;
pub mod history;
pub mod logging;
pub mod notation;
pub mod score;
