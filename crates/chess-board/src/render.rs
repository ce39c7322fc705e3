//! Text rendering of engine snapshots.

use crate::config::{BoardConfig, GlyphStyle};
use crate::session::Feedback;
use chess_engine::{Cell, GameError, Snapshot};

pub const HELP: &str = "\
Commands:
  <square>     click a square, e.g. e2 (select a piece, then click its target)
  <from><to>   move directly, e.g. e2e4
  moves        list legal moves
  fen          print the position as FEN
  new          start a new game
  help         show this text
  quit         leave";

/// Draws boards and feedback as plain text.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    glyphs: GlyphStyle,
    coordinates: bool,
}

impl TextRenderer {
    pub fn new(config: &BoardConfig) -> Self {
        TextRenderer {
            glyphs: config.glyphs,
            coordinates: config.coordinates,
        }
    }

    fn piece_char(&self, cell: &Cell) -> Option<char> {
        let piece = cell.piece?;
        Some(match self.glyphs {
            GlyphStyle::Unicode => piece.symbol(),
            GlyphStyle::Ascii => piece.to_fen_char(),
        })
    }

    /// Renders one three-column cell.
    ///
    /// `[x]` marks the selection, `(x)` a capture target, ` * ` an empty
    /// target. Empty squares alternate between ` . ` and ` : ` by color.
    fn cell(&self, cell: &Cell) -> String {
        let light = (cell.square.row() + cell.square.col()) % 2 == 0;
        match (self.piece_char(cell), cell.selected, cell.highlighted) {
            (Some(c), true, _) => format!("[{c}]"),
            (Some(c), false, true) => format!("({c})"),
            (Some(c), false, false) => format!(" {c} "),
            (None, _, true) => " * ".to_string(),
            (None, _, false) if light => " . ".to_string(),
            (None, _, false) => " : ".to_string(),
        }
    }

    /// Renders the board with the side to move and status line.
    pub fn board(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();
        for (row, cells) in snapshot.cells.chunks(8).enumerate() {
            if self.coordinates {
                out.push_str(&format!("{} ", 8 - row));
            }
            for cell in cells {
                out.push_str(&self.cell(cell));
            }
            out.push('\n');
        }
        if self.coordinates {
            out.push_str("   a  b  c  d  e  f  g  h\n");
        }
        out.push_str(&Self::status_line(snapshot));
        out.push('\n');
        out
    }

    /// The terminal message once the game is over, otherwise the side to
    /// move with any check announcement.
    fn status_line(snapshot: &Snapshot) -> String {
        if snapshot.status.is_terminal() {
            snapshot.message.clone()
        } else if snapshot.message.is_empty() {
            format!("{} to move", snapshot.side_to_move)
        } else {
            format!("{} to move - {}", snapshot.side_to_move, snapshot.message)
        }
    }

    /// Renders a one-line report for `feedback`, if it warrants one.
    pub fn feedback(&self, feedback: &Feedback) -> Option<String> {
        match feedback {
            Feedback::Selected(sq) => Some(format!("Selected {sq}")),
            Feedback::Ignored => None,
            Feedback::Committed(outcome) => Some(match outcome.captured {
                Some(piece) => format!("{} takes {}", outcome.mov, piece),
                None => format!("{}", outcome.mov),
            }),
            Feedback::Rejected(GameError::GameAlreadyOver) => {
                Some("The game is over; type 'new' to play again.".to_string())
            }
            Feedback::Rejected(e) => Some(format!("Rejected: {e}")),
            Feedback::Moves(moves) => {
                let list: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
                Some(format!("{} legal moves: {}", moves.len(), list.join(" ")))
            }
            Feedback::Fen(fen) => Some(fen.clone()),
            Feedback::NewGame => Some("New game.".to_string()),
            Feedback::Help => Some(HELP.to_string()),
            Feedback::Quit => None,
        }
    }
}
