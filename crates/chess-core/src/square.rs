//! Board coordinates and algebraic square names.
//!
//! Rows count ranks from White's side: row 0 is rank 1, row 7 is rank 8.
//! Columns count files: column 0 is file a, column 7 is file h.

use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Errors that can occur when converting an algebraic square name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square '{0}' must be exactly two characters")]
    Length(String),

    #[error("square '{square}' lies outside files a-h or ranks 1-8")]
    OutOfRange {
        square: String,
        coordinate: Coordinate,
    },
}

/// A (row, column) pair.
///
/// A coordinate may point off the board; use [`Coordinate::is_on_board`]
/// before indexing a board with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Creates a coordinate from row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// The file letter maps to the column and the rank digit to the row by
    /// the same linear formula used to lay out the starting position.
    pub fn from_algebraic(square: &str) -> Result<Self, SquareError> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::Length(square.to_string()));
        }
        let coordinate = Coordinate::new(
            i32::from(bytes[1]) - i32::from(b'1'),
            i32::from(bytes[0]) - i32::from(b'a'),
        );
        if !coordinate.is_on_board() {
            return Err(SquareError::OutOfRange {
                square: square.to_string(),
                coordinate,
            });
        }
        Ok(coordinate)
    }

    /// Returns true iff both row and column are in 0-7.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the algebraic name, or `None` for an off-board coordinate.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    /// Returns the coordinate shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Coordinate::new(self.row + d_row, self.col + d_col)
    }

    /// Iterates over all 64 on-board coordinates, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
