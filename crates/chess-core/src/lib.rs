//! Core types for the move checker.
//!
//! This crate provides the value types shared by the engine and the CLI:
//! - [`PieceKind`], [`Color`] and [`Cell`] for square contents
//! - [`Coordinate`] for board positions and algebraic square names
//! - [`MoveRequest`] for `e2 to e4` style move text
//! - [`MoveError`] for the reasons a move is rejected
//! - piece placement notation for describing whole boards

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{MoveError, MoveRequest};
pub use piece::{Cell, PieceKind};
pub use placement::{parse_placement, to_placement, Grid, PlacementError, STARTING_PLACEMENT};
pub use square::{Coordinate, SquareError, BOARD_SIZE};
