//! Move requests in "from to" notation, and the reasons a move is rejected.

use crate::{Coordinate, PieceKind, SquareError};
use std::fmt;
use thiserror::Error;

/// Why a requested move was rejected.
///
/// Every variant is recoverable: the move is refused and the board stays
/// as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cannot parse move: {0}")]
    Parse(String),

    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    #[error("no piece on {0}")]
    EmptySource(Coordinate),

    #[error("illegal move for this piece: {piece} from {from} to {to}")]
    IllegalMove {
        piece: PieceKind,
        from: Coordinate,
        to: Coordinate,
    },
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        match &e {
            SquareError::Length(_) => MoveError::Parse(e.to_string()),
            SquareError::OutOfRange { .. } => MoveError::OutOfBounds(e.to_string()),
        }
    }
}

/// A requested move from one square to another, e.g. `e2 to e4`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl MoveRequest {
    /// The literal that separates the two squares.
    pub const SEPARATOR: &'static str = " to ";

    /// Creates a move request between two coordinates.
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        MoveRequest { from, to }
    }

    /// Parses `<square> to <square>`.
    ///
    /// The text must split on [`Self::SEPARATOR`] into exactly two squares.
    /// No whitespace is trimmed. Squares of the wrong length give
    /// [`MoveError::Parse`]; letters or digits outside the board give
    /// [`MoveError::OutOfBounds`].
    pub fn parse(text: &str) -> Result<Self, MoveError> {
        let parts: Vec<&str> = text.split(Self::SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(MoveError::Parse(format!(
                "expected '<square>{}<square>', got '{}'",
                Self::SEPARATOR,
                text
            )));
        }

        let from = Coordinate::from_algebraic(parts[0])?;
        let to = Coordinate::from_algebraic(parts[1])?;
        Ok(MoveRequest { from, to })
    }

    /// Returns the row and column distance travelled, as absolute values.
    #[inline]
    pub const fn distance(self) -> (i32, i32) {
        (
            (self.to.row - self.from.row).abs(),
            (self.to.col - self.from.col).abs(),
        )
    }
}

impl fmt::Debug for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveRequest({})", self)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, Self::SEPARATOR, self.to)
    }
}
