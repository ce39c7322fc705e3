//! WebAssembly bindings for the chess engine.
//!
//! This crate exposes the engine to a browser board. The page draws squares
//! and forwards clicks; every legality decision stays in Rust.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'chess-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! square.addEventListener('click', () => {
//!   game.click(row, col);
//!   draw(game.snapshot());
//! });
//! ```

use chess_core::{Color, Square};
use chess_engine::GameStatus;
use wasm_bindgen::prelude::*;

/// A chess game that can be manipulated from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: chess_engine::Game,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            inner: chess_engine::Game::new(),
        }
    }

    /// Creates a game from a FEN string.
    ///
    /// Returns an error if the FEN is invalid.
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str) -> Result<Game, JsError> {
        let inner = chess_engine::Game::from_fen(fen).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game { inner })
    }

    /// Returns the current position as a FEN string.
    #[wasm_bindgen(js_name = toFen)]
    pub fn to_fen(&self) -> String {
        self.inner.to_fen()
    }

    /// Handles a click on the square at `row`, `col` (row 0 is rank 8).
    ///
    /// Selects a piece of the side to move, or, when a piece is already
    /// selected, tries to move it there. Returns true if a move was made.
    pub fn click(&mut self, row: u8, col: u8) -> Result<bool, JsError> {
        let sq = Square::new(row, col)
            .ok_or_else(|| JsError::new(&format!("No such square: {}, {}", row, col)))?;
        Ok(match self.inner.selection() {
            Some(from) => self.inner.request_move(from, sq).is_ok(),
            None => {
                self.inner.select(sq);
                false
            }
        })
    }

    /// Moves the piece on `from` to `to` (algebraic squares, e.g. "e2").
    ///
    /// Clears any selection. Returns an error if the move is illegal.
    #[wasm_bindgen(js_name = requestMove)]
    pub fn request_move(&mut self, from: &str, to: &str) -> Result<(), JsError> {
        let square = |s: &str| {
            Square::from_algebraic(s).ok_or_else(|| JsError::new(&format!("No such square: {s}")))
        };
        self.inner
            .request_move(square(from)?, square(to)?)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Makes a move given in coordinate notation (e.g., "e2e4").
    ///
    /// Returns an error if the move is invalid or illegal.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, uci: &str) -> Result<(), JsError> {
        self.inner
            .make_move_uci(uci)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns an array of legal moves in coordinate notation.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<String> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(|m| m.to_uci())
            .collect()
    }

    /// Returns the full view state: cells, selection, highlights, status.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns true if the current side to move is in check.
    #[wasm_bindgen(js_name = isCheck)]
    pub fn is_check(&self) -> bool {
        self.inner.is_check()
    }

    /// Returns true if the game is over (checkmate or stalemate).
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Returns the game result if the game is over.
    ///
    /// Returns one of: "white_wins", "black_wins", "draw", or null if game is ongoing.
    #[wasm_bindgen]
    pub fn result(&self) -> Option<String> {
        match self.inner.status() {
            GameStatus::Checkmate {
                winner: Color::White,
            } => Some("white_wins".to_string()),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Some("black_wins".to_string()),
            GameStatus::Stalemate => Some("draw".to_string()),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }

    /// Returns the announcement for the current status ("Check!", ...).
    pub fn message(&self) -> String {
        self.inner.status().message()
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        match self.inner.side_to_move() {
            Color::White => "white".to_string(),
            Color::Black => "black".to_string(),
        }
    }

    /// Returns the piece at the given square in algebraic notation.
    ///
    /// Returns null if the square is empty.
    /// Returns a string like "P" (white pawn), "k" (black king), etc.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_algebraic(square)?;
        let piece = self.inner.board().piece_at(sq)?;
        Some(piece.to_fen_char().to_string())
    }

    /// Resets the game to the starting position.
    pub fn reset(&mut self) {
        self.inner.new_game();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_new() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), "white");
        assert!(!game.is_game_over());
        assert_eq!(game.result(), None);
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn game_from_fen() {
        let game = Game::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b").unwrap();
        assert_eq!(game.side_to_move(), "black");
    }

    #[test]
    fn piece_at() {
        let game = Game::new();
        assert_eq!(game.piece_at("e1"), Some("K".to_string()));
        assert_eq!(game.piece_at("e8"), Some("k".to_string()));
        assert_eq!(game.piece_at("e4"), None);
    }

    #[test]
    fn clicks_play_a_move() {
        let mut game = Game::new();
        // e2 is row 6, column 4; e4 is row 4.
        assert!(!game.click(6, 4).unwrap());
        assert!(game.click(4, 4).unwrap());
        assert_eq!(game.piece_at("e4"), Some("P".to_string()));
        assert_eq!(game.side_to_move(), "black");
    }

    #[test]
    fn fools_mate_result() {
        let mut game = Game::new();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.make_move(m).unwrap();
        }
        assert!(game.is_game_over());
        assert!(game.is_check());
        assert_eq!(game.result(), Some("black_wins".to_string()));
        assert_eq!(game.message(), "Black wins by checkmate!");

        game.reset();
        assert_eq!(game.result(), None);
    }
}
