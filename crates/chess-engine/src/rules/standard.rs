//! Standard piece movement.

use super::RuleSet;
use crate::check::{self, GameStatus};
use crate::{movegen, Board, Position};
use chess_core::{Color, Move, Square};

/// Standard chess piece movement with check, checkmate and stalemate.
///
/// Castling, en passant, promotion and the draw rules based on move history
/// are not part of this rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn is_pseudo_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        movegen::is_pseudo_legal(board, from, to)
    }

    fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        movegen::is_legal(board, from, to)
    }

    fn legal_destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        movegen::legal_destinations(board, from)
    }

    fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        movegen::generate_moves(board, color)
    }

    fn is_check(&self, board: &Board, color: Color) -> bool {
        check::is_in_check(board, color)
    }

    fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        check::has_legal_moves(board, color)
    }

    fn status(&self, position: &Position) -> GameStatus {
        check::classify(&position.board, position.side_to_move)
    }
}
