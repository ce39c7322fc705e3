//! Game session management.
//!
//! The [`Game`] struct owns everything one game needs:
//! - The current [`Position`] (board and side to move)
//! - The selected square, which scopes the highlighted destinations
//! - The status announced after the last committed move
//! - The list of committed moves

use crate::check::GameStatus;
use crate::rules::{RuleSet, StandardChess};
use crate::snapshot::Snapshot;
use crate::{Board, Position};
use chess_core::{Color, ColoredPiece, FenError, Move, Square};
use thiserror::Error;

/// A committed move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move as played.
    pub mov: Move,
    /// The piece that moved.
    pub piece: ColoredPiece,
    /// The piece that was taken, if any.
    pub captured: Option<ColoredPiece>,
}

/// What a successful move request produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was committed.
    pub mov: Move,
    /// The piece that was taken, if any.
    pub captured: Option<ColoredPiece>,
    /// The position's status for the side now to move.
    pub status: GameStatus,
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The move text could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    rules: StandardChess,
    selection: Option<Square>,
    status: GameStatus,
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardChess.initial_position())
    }

    /// Creates a game from a custom starting position.
    ///
    /// The position is classified immediately, so a position that is
    /// already mate or stalemate starts out finished.
    pub fn from_position(position: Position) -> Self {
        let rules = StandardChess;
        let status = rules.status(&position);
        Game {
            position,
            rules,
            selection: None,
            status,
            moves: Vec::new(),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Discards the current game and starts over from the initial position.
    pub fn new_game(&mut self) {
        *self = Self::new();
        tracing::debug!("new game started");
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns the status of the current position.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        matches!(
            self.status,
            GameStatus::Check | GameStatus::Checkmate { .. }
        )
    }

    /// Returns the selected square, if any.
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Selects `sq` if it holds a piece of the side to move.
    ///
    /// Returns false, leaving the selection unchanged, for empty squares,
    /// enemy pieces, or a finished game.
    pub fn select(&mut self, sq: Square) -> bool {
        if self.is_game_over() {
            return false;
        }
        let own = self
            .board()
            .piece_at(sq)
            .is_some_and(|p| p.belongs_to(self.side_to_move()));
        if own {
            self.selection = Some(sq);
            tracing::debug!(square = %sq, "selected");
        }
        own
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns the legal destinations of the selected piece.
    pub fn highlights(&self) -> Vec<Square> {
        match self.selection {
            Some(from) => self.rules.legal_destinations(self.board(), from),
            None => Vec::new(),
        }
    }

    /// Returns the legal destinations of the piece on `from`.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.rules.legal_destinations(self.board(), from)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.rules.generate_moves(self.board(), self.side_to_move())
    }

    /// Returns the committed moves, oldest first.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Plays the piece on `from` to `to`.
    ///
    /// The selection is cleared whether or not the move is accepted. A
    /// rejected move leaves the board and turn untouched.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        self.selection = None;

        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let mov = Move::new(from, to);
        let piece = match self.board().piece_at(from) {
            Some(p) if p.belongs_to(self.side_to_move()) => p,
            _ => {
                tracing::debug!(%mov, "rejected: no piece of the side to move");
                return Err(GameError::IllegalMove(mov));
            }
        };
        if !self.rules.is_legal(self.board(), from, to) {
            tracing::debug!(%mov, "rejected: illegal");
            return Err(GameError::IllegalMove(mov));
        }

        let captured = self.position.play(mov);
        self.moves.push(GameMove {
            mov,
            piece,
            captured,
        });
        self.status = self.rules.status(&self.position);

        tracing::debug!(%mov, status = ?self.status, "move committed");
        if self.status.is_terminal() {
            tracing::info!(status = %self.status, plies = self.moves.len(), "game over");
        }

        Ok(MoveOutcome {
            mov,
            captured,
            status: self.status,
        })
    }

    /// Plays a move given in coordinate notation (e.g., "e2e4").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<MoveOutcome, GameError> {
        let m = Move::from_uci(uci).ok_or_else(|| GameError::InvalidNotation(uci.to_string()))?;
        self.request_move(m.from(), m.to())
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Captures everything a view needs to draw the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
