//! Board plus side to move.

use chess_core::{Color, ColoredPiece, FenError, FenParser, Move};

use crate::Board;

/// Complete rules state: where the pieces stand and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,
}

impl Position {
    /// Creates the standard starting position, White to move.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
        }
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Position {
            board: Board::from_placement(parsed.placement),
            side_to_move: parsed.active_color,
        })
    }

    /// Converts the position to a FEN string (placement and active color).
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            self.board.to_fen_placement(),
            self.side_to_move.to_fen_char()
        )
    }

    /// Moves the piece and hands the turn to the other side.
    ///
    /// Legality is the caller's responsibility. Returns the captured piece.
    pub fn play(&mut self, m: Move) -> Option<ColoredPiece> {
        let captured = self.board.apply(m);
        self.side_to_move = self.side_to_move.opposite();
        captured
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
