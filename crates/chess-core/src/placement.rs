//! Piece placement notation (the first field of a FEN record).
//!
//! Ranks are listed from rank 8 down to rank 1, separated by `/`. Within a
//! rank, files run a to h; a digit stands for that many empty squares.

use crate::{Cell, PieceKind};
use thiserror::Error;

/// An 8×8 grid of cells, indexed `[row][col]` with row 0 on rank 1.
pub type Grid = [[Cell; 8]; 8];

/// Errors that can occur when parsing a piece placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid piece placement: invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: usize },

    #[error("invalid piece placement: rank {rank} has {squares} squares, expected 8")]
    RankLength { rank: usize, squares: u32 },
}

/// The standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses a placement string into a grid.
pub fn parse_placement(placement: &str) -> Result<Grid, PlacementError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut grid: Grid = [[Cell::Empty; 8]; 8];
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - i;
        let row = 7 - i;
        let mut squares = 0u32;

        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                squares += run;
            } else if let Some((kind, color)) = PieceKind::from_char(c) {
                if squares < 8 {
                    grid[row][squares as usize] = Cell::Occupied(kind, color);
                }
                squares += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { character: c, rank });
            }
        }

        if squares != 8 {
            return Err(PlacementError::RankLength { rank, squares });
        }
    }

    Ok(grid)
}

/// Writes a grid back out as a placement string.
pub fn to_placement(grid: &Grid) -> String {
    let mut ranks = Vec::with_capacity(8);
    for row in grid.iter().rev() {
        let mut rank = String::new();
        let mut empty = 0;
        for cell in row {
            match cell {
                Cell::Empty => empty += 1,
                Cell::Occupied(kind, color) => {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(kind.to_char(*color));
                }
            }
        }
        if empty > 0 {
            rank.push_str(&empty.to_string());
        }
        ranks.push(rank);
    }
    ranks.join("/")
}
