//! A running game: the current board, whose turn it is, and the moves played.
//!
//! The [`Game`] struct threads turn state explicitly through each request.
//! It does not stop a player from moving the other side's pieces; the turn
//! only records who is expected to move next.

use crate::rules::{LenientRules, MoveOutcome, RuleSet};
use crate::Board;
use chess_core::{Color, MoveError, MoveRequest, PlacementError};

/// A game session.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = LenientRules> {
    rules: R,
    /// Current board.
    board: Board,
    /// Side expected to move next.
    turn: Color,
    /// Accepted moves, oldest first.
    moves: Vec<MoveRequest>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Self {
        Self::with_rules(LenientRules)
    }

    /// Creates a game from a piece placement string, White to move.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Self::from_board(LenientRules, Board::from_placement(placement)?))
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game using the given rules and their starting board.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Self::from_board(rules, board)
    }

    /// Creates a game from a custom board, White to move.
    pub fn from_board(rules: R, board: Board) -> Self {
        Game {
            rules,
            board,
            turn: Color::White,
            moves: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side expected to move next.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the accepted moves.
    pub fn move_history(&self) -> &[MoveRequest] {
        &self.moves
    }

    /// Returns the number of accepted moves.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Submits move text such as `e2 to e4`.
    ///
    /// On acceptance the board is replaced, the move recorded and the turn
    /// passed to the other side. On rejection nothing changes.
    pub fn submit(&mut self, text: &str) -> Result<&Board, MoveError> {
        match self.rules.play(&self.board, text) {
            MoveOutcome::Accepted { request, board } => {
                tracing::debug!(mover = %self.turn, %request, "move accepted");
                self.board = board;
                self.moves.push(request);
                self.turn = self.turn.opposite();
                Ok(&self.board)
            }
            MoveOutcome::Rejected { error, .. } => {
                tracing::debug!(mover = %self.turn, input = text, %error, "move rejected");
                Err(error)
            }
        }
    }
}
