//! Geometry-only piece rules.

use super::{Enforcement, RuleSet};
use crate::Board;
use chess_core::{Cell, Color, Coordinate, MoveError, MoveRequest, PieceKind};

/// Rules that check each piece's movement shape and little else.
///
/// - Knight, bishop, rook and queen moves are checked for shape only. Paths
///   are not checked for blockers and any destination may be taken,
///   including a square holding a piece of the mover's own color.
/// - The king may move to any square.
/// - Pawns advance one square onto an empty square, two squares from their
///   home row over an empty square, or capture one square diagonally forward.
/// - Either color may move at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientRules;

impl RuleSet for LenientRules {
    fn enforcement(&self) -> Enforcement {
        Enforcement::default()
    }

    fn check_move(
        &self,
        board: &Board,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<(), MoveError> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveError::OutOfBounds(square.to_string()));
            }
        }

        let (kind, color) = match board.piece_at(from) {
            Cell::Empty => return Err(MoveError::EmptySource(from)),
            Cell::Occupied(kind, color) => (kind, color),
        };

        let legal = match kind {
            PieceKind::Pawn => pawn_move(from, to, color, board),
            PieceKind::Knight => knight_move(from, to, board),
            PieceKind::Bishop => bishop_move(from, to, board),
            PieceKind::Rook => rook_move(from, to, board),
            PieceKind::Queen => queen_move(from, to, board),
            PieceKind::King => king_move(from, to, board),
        };

        if legal {
            Ok(())
        } else {
            Err(MoveError::IllegalMove {
                piece: kind,
                from,
                to,
            })
        }
    }
}

/// L-shaped jump: one and two squares in either order.
pub fn knight_move(from: Coordinate, to: Coordinate, _board: &Board) -> bool {
    if !to.is_on_board() {
        return false;
    }
    matches!(MoveRequest::new(from, to).distance(), (1, 2) | (2, 1))
}

/// Straight line along a row or column.
pub fn rook_move(from: Coordinate, to: Coordinate, _board: &Board) -> bool {
    if !to.is_on_board() {
        return false;
    }
    from.row == to.row || from.col == to.col
}

/// Diagonal line.
pub fn bishop_move(from: Coordinate, to: Coordinate, _board: &Board) -> bool {
    if !to.is_on_board() {
        return false;
    }
    let (d_row, d_col) = MoveRequest::new(from, to).distance();
    d_row == d_col
}

/// Straight or diagonal line.
pub fn queen_move(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    rook_move(from, to, board) || bishop_move(from, to, board)
}

/// Any destination.
pub fn king_move(_from: Coordinate, _to: Coordinate, _board: &Board) -> bool {
    true
}

/// Pawn advance or diagonal capture for a pawn of `color` standing on `from`.
///
/// The cases are tried in order: single advance onto an empty square, double
/// advance from the home row over an empty square, diagonal capture of an
/// opposing piece. The double advance does not look at the landing square.
pub fn pawn_move(from: Coordinate, to: Coordinate, color: Color, board: &Board) -> bool {
    if !to.is_on_board() {
        return false;
    }
    let forward = color.pawn_direction();

    if from.col == to.col && to.row == from.row + forward && board.piece_at(to).is_empty() {
        return true;
    }

    if from.col == to.col
        && to.row == from.row + 2 * forward
        && from.row == color.pawn_home_row()
        && board.piece_at(from.offset(forward, 0)).is_empty()
    {
        return true;
    }

    (to.col - from.col).abs() == 1
        && to.row == from.row + forward
        && board.piece_at(to).color() == Some(color.opposite())
}
