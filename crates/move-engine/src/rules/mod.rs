//! Rule set abstraction for move checking.
//!
//! This module provides the [`RuleSet`] trait. The request/response cycle
//! ([`RuleSet::play`]) is written once against the trait; a rule set only
//! decides which moves each piece may make.

mod lenient;

pub use lenient::{
    bishop_move, king_move, knight_move, pawn_move, queen_move, rook_move, LenientRules,
};

use crate::Board;
use chess_core::{Coordinate, MoveError, MoveRequest};

/// Which checks a rule set performs beyond piece geometry.
///
/// Each flag is `false` when the corresponding check is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Enforcement {
    /// Sliding pieces may not pass through occupied squares.
    pub sliding_paths: bool,
    /// A piece may not land on a piece of its own color.
    pub self_capture: bool,
    /// The king moves at most one square.
    pub king_distance: bool,
    /// A pawn's two-square advance requires an empty landing square.
    pub double_advance_landing: bool,
    /// Only the side to move may move.
    pub turn_order: bool,
}

/// Result of one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal and the new board is attached.
    Accepted { request: MoveRequest, board: Board },
    /// The move was refused; `board` is the unchanged input board.
    Rejected { error: MoveError, board: Board },
}

impl MoveOutcome {
    /// Returns the board after the cycle (new on acceptance, old otherwise).
    pub fn board(&self) -> &Board {
        match self {
            MoveOutcome::Accepted { board, .. } | MoveOutcome::Rejected { board, .. } => board,
        }
    }

    /// Returns true if the move was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Converts into the new board, or the rejection reason.
    pub fn into_result(self) -> Result<Board, MoveError> {
        match self {
            MoveOutcome::Accepted { board, .. } => Ok(board),
            MoveOutcome::Rejected { error, .. } => Err(error),
        }
    }
}

/// Trait for implementing move rules.
///
/// # Example
///
/// ```
/// use move_engine::{LenientRules, RuleSet};
///
/// let board = LenientRules.initial_board();
/// let outcome = LenientRules.play(&board, "e2 to e4");
/// assert!(outcome.is_accepted());
/// ```
pub trait RuleSet {
    /// Returns the starting board for these rules.
    fn initial_board(&self) -> Board {
        Board::initialize()
    }

    /// Reports which checks beyond geometry these rules perform.
    fn enforcement(&self) -> Enforcement;

    /// Checks a move, returning the reason when it is refused.
    ///
    /// Reports [`MoveError::OutOfBounds`] for off-board squares,
    /// [`MoveError::EmptySource`] when `from` is empty and
    /// [`MoveError::IllegalMove`] when the piece cannot move that way.
    fn check_move(
        &self,
        board: &Board,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<(), MoveError>;

    /// Returns true if the move is legal on this board.
    fn is_legal(&self, board: &Board, from: Coordinate, to: Coordinate) -> bool {
        self.check_move(board, from, to).is_ok()
    }

    /// Applies a move without checking legality.
    fn make_move(
        &self,
        board: &Board,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Board, MoveError> {
        board.apply_move(from, to)
    }

    /// Runs one request/response cycle on move text such as `e2 to e4`.
    ///
    /// Parsing happens first, then the bounds check, then the piece rules.
    /// The input board is never modified.
    fn play(&self, board: &Board, text: &str) -> MoveOutcome {
        let checked = MoveRequest::parse(text).and_then(|request| {
            self.check_move(board, request.from, request.to)?;
            let next = self.make_move(board, request.from, request.to)?;
            Ok((request, next))
        });
        match checked {
            Ok((request, next)) => MoveOutcome::Accepted {
                request,
                board: next,
            },
            Err(error) => MoveOutcome::Rejected {
                error,
                board: *board,
            },
        }
    }
}
