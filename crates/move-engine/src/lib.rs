//! Move legality checking and board updates for "from to" move text.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 board value, its starting layout and rendering
//! - [`RuleSet`] - trait deciding which moves each piece may make
//! - [`LenientRules`] - geometry-only rules for every piece kind
//! - [`MoveOutcome`] - the accepted/rejected answer to one move request
//! - [`Game`] - a session that tracks whose turn it is and the moves played
//!
//! Boards are values. Checking a move reads a board, and applying one
//! returns a fresh board, so any number of boards can be inspected side by
//! side without interfering with each other.
//!
//! # Example
//!
//! ```
//! use move_engine::{Board, Game, LenientRules, RuleSet};
//!
//! // Stateless: one request/response cycle on a board value
//! let board = Board::initialize();
//! let outcome = LenientRules.play(&board, "g1 to f3");
//! assert!(outcome.is_accepted());
//!
//! // Session: board plus turn tracking
//! let mut game = Game::new();
//! game.submit("e2 to e4").unwrap();
//! assert!(game.submit("e2 to e4").is_err());
//! println!("{}", game.board());
//! ```

mod board;
mod game;
pub mod rules;

pub use board::{Board, RankOrder};
pub use game::Game;
pub use rules::{Enforcement, LenientRules, MoveOutcome, RuleSet};
