//! Check, checkmate and stalemate detection.

use crate::movegen::{is_legal, is_pseudo_legal};
use crate::Board;
use chess_core::{Color, Piece, Square};
use serde::Serialize;
use std::fmt;

/// What the position means for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    /// Play continues normally.
    Ongoing,
    /// The side to move is in check but can get out of it.
    Check,
    /// The side to move is in check with no legal move; `winner` delivered
    /// the mate.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    /// Returns true once the game can accept no further moves.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// Returns the winner, if the game was decided by mate.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns the player-facing announcement; empty while play is ongoing.
    pub fn message(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Check => write!(f, "Check!"),
            GameStatus::Checkmate { winner } => write!(f, "{} wins by checkmate!", winner),
            GameStatus::Stalemate => write!(f, "Stalemate! It's a draw."),
        }
    }
}

/// Finds `color`'s king, scanning row by row from a8.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, p)| p.piece == Piece::King)
        .map(|(sq, _)| sq)
}

/// Returns true if any enemy piece could capture `color`'s king.
///
/// A board without that king is treated as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = find_king(board, color) else {
        tracing::debug!(%color, "no king on board, treating as not in check");
        return false;
    };
    board
        .pieces_of(color.opposite())
        .any(|(from, _)| is_pseudo_legal(board, from, king))
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| Square::all().any(|to| is_legal(board, from, to)))
}

/// Classifies the position for `side_to_move`.
pub fn classify(board: &Board, side_to_move: Color) -> GameStatus {
    let in_check = is_in_check(board, side_to_move);
    let can_move = has_legal_moves(board, side_to_move);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: side_to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board(fen: &str) -> Board {
        Position::from_fen(fen).unwrap().board
    }

    #[test]
    fn find_kings_at_start() {
        let b = Board::startpos();
        assert_eq!(find_king(&b, Color::White), Square::from_algebraic("e1"));
        assert_eq!(find_king(&b, Color::Black), Square::from_algebraic("e8"));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let b = board("8/8/8/8/8/8/8/r3K3 w");
        assert_eq!(find_king(&b, Color::Black), None);
        assert!(!is_in_check(&b, Color::Black));
        assert!(is_in_check(&b, Color::White));
    }

    #[test]
    fn start_position_is_quiet() {
        let b = Board::startpos();
        for color in Color::ALL {
            assert!(!is_in_check(&b, color));
            assert!(has_legal_moves(&b, color));
        }
        assert_eq!(classify(&b, Color::White), GameStatus::Ongoing);
    }

    #[test]
    fn pawn_gives_check_only_diagonally() {
        let diagonal = board("8/8/8/8/8/3p4/4K3/k7 w");
        assert!(is_in_check(&diagonal, Color::White));

        let in_front = board("8/8/8/8/8/4p3/4K3/k7 w");
        assert!(!is_in_check(&in_front, Color::White));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let b = board("4k3/8/8/8/8/3n4/3PPP2/4K3 w");
        assert!(is_in_check(&b, Color::White));
    }

    #[test]
    fn blocked_slider_does_not_check() {
        let b = board("4k3/8/8/8/8/8/4P3/r2NK3 w");
        assert!(!is_in_check(&b, Color::White));
    }

    #[test]
    fn classify_check() {
        let b = board("4k3/8/8/8/8/8/8/r3K3 w");
        assert_eq!(classify(&b, Color::White), GameStatus::Check);
    }

    #[test]
    fn classify_back_rank_mate() {
        let b = board("6k1/5ppp/8/8/8/8/8/K2R4 b");
        assert!(!is_in_check(&b, Color::Black));
        let mated = board("3R2k1/5ppp/8/8/8/8/8/K7 b");
        assert_eq!(
            classify(&mated, Color::Black),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn classify_stalemate() {
        let b = board("7k/5Q2/6K1/8/8/8/8/8 b");
        assert_eq!(classify(&b, Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn status_messages() {
        assert_eq!(GameStatus::Ongoing.message(), "");
        assert_eq!(GameStatus::Check.message(), "Check!");
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::Black
            }
            .message(),
            "Black wins by checkmate!"
        );
        assert_eq!(GameStatus::Stalemate.message(), "Stalemate! It's a draw.");
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert_eq!(GameStatus::Check.winner(), None);
    }
}
