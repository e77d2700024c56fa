//! The 8×8 board value.

use chess_core::{
    parse_placement, to_placement, Cell, Color, Coordinate, Grid, MoveError, MoveRequest,
    PieceKind, PlacementError,
};
use std::fmt;

/// Order in which ranks are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// Rank 8 at the top, as seen from White's side.
    #[default]
    Descending,
    /// Rank 1 at the top.
    Ascending,
}

/// A full board of 64 cells.
///
/// `Board` is a plain value: moving a piece returns a new board and never
/// changes the one it was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    ///
    /// White's back rank is row 0 and its pawns row 1; Black mirrors this on
    /// rows 7 and 6.
    pub fn initialize() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                board.cells[color.back_rank() as usize][col] = Cell::Occupied(*kind, color);
                board.cells[color.pawn_home_row() as usize][col] =
                    Cell::Occupied(PieceKind::Pawn, color);
            }
        }
        board
    }

    /// Creates a board from a piece placement string such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            cells: parse_placement(placement)?,
        })
    }

    /// Returns the piece placement string for this board.
    pub fn to_placement(&self) -> String {
        to_placement(&self.cells)
    }

    /// Returns the contents of a square.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board. Use [`Board::get`] when the
    /// coordinate has not been validated.
    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Returns the contents of a square, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        coord.is_on_board().then(|| self.piece_at(coord))
    }

    /// Returns a copy of this board with one square replaced.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[must_use]
    pub fn with_cell(mut self, coord: Coordinate, cell: Cell) -> Self {
        self.cells[coord.row as usize][coord.col as usize] = cell;
        self
    }

    /// Returns a new board with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is replaced and `from` becomes empty. Legality
    /// is not checked here; only that both squares are on the board.
    pub fn apply_move(&self, from: Coordinate, to: Coordinate) -> Result<Board, MoveError> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveError::OutOfBounds(square.to_string()));
            }
        }
        let mut next = *self;
        next.cells[to.row as usize][to.col as usize] = self.piece_at(from);
        next.cells[from.row as usize][from.col as usize] = Cell::Empty;
        Ok(next)
    }

    /// Parses `text` and applies it without checking legality.
    ///
    /// On any parse or bounds failure the error is returned and no new board
    /// is produced.
    pub fn apply_move_text(&self, text: &str) -> Result<Board, MoveError> {
        let request = MoveRequest::parse(text)?;
        self.apply_move(request.from, request.to)
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, PieceKind, Color)> + '_ {
        Coordinate::all().filter_map(move |c| match self.piece_at(c) {
            Cell::Empty => None,
            Cell::Occupied(kind, color) => Some((c, kind, color)),
        })
    }

    /// Renders the board as text with a file header and rank labels.
    pub fn render(&self, order: RankOrder) -> String {
        let mut out = String::from("  a b c d e f g h\n");
        let rows: Box<dyn Iterator<Item = usize>> = match order {
            RankOrder::Descending => Box::new((0..8).rev()),
            RankOrder::Ascending => Box::new(0..8),
        };
        for row in rows {
            out.push_str(&format!("{} ", row + 1));
            for cell in &self.cells[row] {
                out.push(cell.to_char());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RankOrder::Descending))
    }
}
