//! Interactive move loop over any line reader and writer.

use move_engine::{Game, RankOrder, RuleSet};
use std::io::{self, BufRead, Write};

/// Prompt shown before each move.
pub const PROMPT: &str = "Enter move (e.g., 'e2 to e4'): ";

/// Drives a [`Game`] from lines of input.
pub struct Terminal<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    rank_order: RankOrder,
    show_player: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W, rank_order: RankOrder, show_player: bool) -> Self {
        Self {
            reader,
            writer,
            rank_order,
            show_player,
        }
    }

    /// Reads the next move line without its line terminator.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 become
    /// replacement characters, so such a line fails to parse as a move.
    fn read_move(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Plays moves until input runs out.
    ///
    /// Each round prints the player to move and the board, then submits one
    /// line to the game and reports whether it was accepted.
    pub fn run<S: RuleSet>(&mut self, game: &mut Game<S>) -> io::Result<()> {
        loop {
            if self.show_player {
                writeln!(self.writer, "Current Player: {}", game.turn().player_name())?;
            }
            write!(self.writer, "{}", game.board().render(self.rank_order))?;
            write!(self.writer, "{}", PROMPT)?;
            self.writer.flush()?;

            let line = match self.read_move()? {
                Some(line) => line,
                None => {
                    tracing::info!(plies = game.ply_count(), "end of input");
                    writeln!(self.writer)?;
                    return Ok(());
                }
            };

            match game.submit(&line).map(|_| ()) {
                Ok(()) => {
                    if let Some(request) = game.move_history().last() {
                        writeln!(self.writer, "Moved {}.", request)?;
                    }
                }
                Err(e) => {
                    writeln!(self.writer, "Invalid move. Try again. ({})", e)?;
                }
            }
        }
    }
}
