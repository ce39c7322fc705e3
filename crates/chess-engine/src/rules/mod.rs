//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam between the game
//! session and the movement rules. [`Game`](crate::Game) drives play through
//! it; [`StandardChess`] is the rule set shipped here.

mod standard;

pub use standard::StandardChess;

use crate::check::GameStatus;
use crate::{Board, Position};
use chess_core::{Color, Move, Square};

/// Movement and game-end rules for one variant of chess.
///
/// # Example
///
/// ```
/// use chess_engine::rules::RuleSet;
/// use chess_engine::StandardChess;
/// use chess_core::Square;
///
/// let position = StandardChess.initial_position();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// assert_eq!(StandardChess.legal_destinations(&position.board, e2).len(), 2);
/// ```
pub trait RuleSet {
    /// Returns the position a new game starts from.
    fn initial_position(&self) -> Position;

    /// Returns true if the move matches the piece's movement pattern and
    /// occupancy rules, ignoring the safety of the mover's king.
    fn is_pseudo_legal(&self, board: &Board, from: Square, to: Square) -> bool;

    /// Returns true if the move may actually be played.
    fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool;

    /// Returns every legal destination for the piece on `from`.
    fn legal_destinations(&self, board: &Board, from: Square) -> Vec<Square>;

    /// Returns every legal move for `color`.
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move>;

    /// Returns true if `color`'s king is attacked.
    fn is_check(&self, board: &Board, color: Color) -> bool;

    /// Returns true if `color` has at least one legal move.
    fn has_legal_moves(&self, board: &Board, color: Color) -> bool;

    /// Classifies the position for the side to move.
    fn status(&self, position: &Position) -> GameStatus;

    /// Returns true if the position admits no further play.
    fn is_game_over(&self, position: &Position) -> bool {
        self.status(position).is_terminal()
    }
}
