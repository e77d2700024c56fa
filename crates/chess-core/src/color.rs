//! Player color representation.

/// Represents the two players in chess.
///
/// White pieces are written with uppercase letters and start on row 0,
/// Black pieces with lowercase letters and start on row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the pawn direction in row steps (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the back rank row for this color (0 for White, 7 for Black).
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Returns the row this color's pawns start on (1 for White, 6 for Black).
    #[inline]
    pub const fn pawn_home_row(self) -> i32 {
        self.back_rank() + self.pawn_direction()
    }

    /// Returns the seat name shown to the person playing this color.
    pub const fn player_name(self) -> &'static str {
        match self {
            Color::White => "Player 1",
            Color::Black => "Player 2",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
