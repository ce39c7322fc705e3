//! View-facing state snapshot.

use crate::check::GameStatus;
use crate::Game;
use chess_core::{Color, ColoredPiece, Square};
use serde::Serialize;

/// One board square as a view draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub square: Square,
    pub piece: Option<ColoredPiece>,
    /// Unicode glyph of the piece, if any.
    pub symbol: Option<char>,
    pub selected: bool,
    /// True if the selected piece may move here.
    pub highlighted: bool,
}

/// Everything a view needs to redraw after a state change.
///
/// Views read this and present it; they never decide legality themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// All 64 squares, row-major from a8 to h1.
    pub cells: Vec<Cell>,
    pub side_to_move: Color,
    pub selection: Option<Square>,
    pub highlights: Vec<Square>,
    pub status: GameStatus,
    /// Player-facing announcement for `status`; empty while ongoing.
    pub message: String,
    pub fen: String,
}

impl Snapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        let selection = game.selection();
        let highlights = game.highlights();
        let board = game.board();

        let cells = Square::all()
            .map(|square| {
                let piece = board.piece_at(square);
                Cell {
                    square,
                    piece,
                    symbol: piece.map(ColoredPiece::symbol),
                    selected: selection == Some(square),
                    highlighted: highlights.contains(&square),
                }
            })
            .collect();

        Snapshot {
            cells,
            side_to_move: game.side_to_move(),
            selection,
            highlights,
            status: game.status(),
            message: game.status().message(),
            fen: game.to_fen(),
        }
    }

    /// Returns the cell for `sq`.
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.index()]
    }
}
