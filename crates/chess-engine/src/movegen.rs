//! Move legality.
//!
//! Legality is decided in two layers:
//! - [`is_pseudo_legal`] checks the movement pattern of the piece and the
//!   occupancy of the squares involved, ignoring king safety.
//! - [`is_legal`] additionally plays the move on a copy of the board and
//!   rejects it if the mover's own king would then be attacked.
//!
//! Attack detection ([`is_in_check`]) is built on the first layer only,
//! which is what keeps the two from recursing into each other.

use crate::check::is_in_check;
use crate::Board;
use chess_core::{Color, Move, Piece, Square};

/// Returns true if the piece on `from` may move to `to` by its movement
/// pattern, without regard to the safety of its own king.
///
/// Fails when `from` is empty or when `to` holds a piece of the mover's own
/// side.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color == mover.color) {
        return false;
    }

    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    match mover.piece {
        Piece::Pawn => pawn_pattern(board, mover.color, from, to, d_row, d_col),
        Piece::Rook => rook_line(d_row, d_col) && board.is_path_clear(from, to),
        Piece::Bishop => bishop_line(d_row, d_col) && board.is_path_clear(from, to),
        Piece::Queen => {
            (rook_line(d_row, d_col) || bishop_line(d_row, d_col))
                && board.is_path_clear(from, to)
        }
        Piece::Knight => matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)),
        Piece::King => {
            d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
        }
    }
}

/// Same rank or same file, excluding the null move.
fn rook_line(d_row: i8, d_col: i8) -> bool {
    (d_row == 0) != (d_col == 0)
}

/// Equal non-zero row and column distance.
fn bishop_line(d_row: i8, d_col: i8) -> bool {
    d_row != 0 && d_row.abs() == d_col.abs()
}

fn pawn_pattern(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    d_row: i8,
    d_col: i8,
) -> bool {
    let forward = color.pawn_direction();
    let target_empty = board.is_empty(to);

    if d_col == 0 && d_row == forward {
        return target_empty;
    }

    if d_col == 0 && d_row == 2 * forward && from.row() == color.pawn_start_row() {
        let skipped = from.offset(forward, 0);
        return target_empty && skipped.is_some_and(|sq| board.is_empty(sq));
    }

    // Own pieces were already excluded, so an occupied target is an enemy.
    if d_col.abs() == 1 && d_row == forward {
        return !target_empty;
    }

    false
}

/// Returns true if moving from `from` to `to` is legal: pseudo-legal and
/// not leaving the mover's own king in check.
///
/// The caller's board is never modified; the move is tried on a copy.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    if !is_pseudo_legal(board, from, to) {
        return false;
    }
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let after = board.with_move(Move::new(from, to));
    !is_in_check(&after, mover.color)
}

/// Returns every square the piece on `from` may legally move to, in
/// row-major order. Empty when `from` is empty.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all().filter(|&to| is_legal(board, from, to)).collect()
}

/// Generates all legal moves for `color`.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        Position::from_fen(fen).unwrap().board
    }

    fn dests(board: &Board, from: &str) -> Vec<String> {
        let mut v: Vec<String> = legal_destinations(board, sq(from))
            .into_iter()
            .map(|s| s.to_algebraic())
            .collect();
        v.sort();
        v
    }

    #[test]
    fn empty_source_is_never_valid() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e5")));
        assert!(!is_legal(&b, sq("e4"), sq("e5")));
        assert!(legal_destinations(&b, sq("e4")).is_empty());
    }

    #[test]
    fn no_self_capture() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, sq("a1"), sq("a2")));
        assert!(!is_pseudo_legal(&b, sq("d1"), sq("e1")));
        assert!(!is_pseudo_legal(&b, sq("e1"), sq("e2")));
    }

    #[test]
    fn twenty_opening_moves() {
        let b = Board::startpos();
        assert_eq!(generate_moves(&b, Color::White).len(), 20);
        assert_eq!(generate_moves(&b, Color::Black).len(), 20);
    }

    #[test]
    fn pawn_pushes() {
        let b = Board::startpos();
        assert_eq!(dests(&b, "e2"), vec!["e3", "e4"]);
        assert_eq!(dests(&b, "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn pawn_double_push_only_from_start_row() {
        let b = board("4k3/8/8/8/8/4P3/8/4K3 w");
        assert_eq!(dests(&b, "e3"), vec!["e4"]);
    }

    #[test]
    fn pawn_double_push_needs_both_squares_empty() {
        let blocked_near = board("4k3/8/8/8/8/4n3/4P3/4K3 w");
        assert!(dests(&blocked_near, "e2").is_empty());

        let blocked_far = board("4k3/8/8/8/4n3/8/4P3/4K3 w");
        assert_eq!(dests(&blocked_far, "e2"), vec!["e3"]);
    }

    #[test]
    fn pawn_never_captures_straight() {
        let b = board("4k3/8/8/8/8/4p3/4P3/4K3 w");
        assert!(!is_pseudo_legal(&b, sq("e2"), sq("e3")));
    }

    #[test]
    fn pawn_diagonal_needs_a_victim() {
        let empty = board("4k3/8/8/8/8/8/4P3/4K3 w");
        assert!(!is_pseudo_legal(&empty, sq("e2"), sq("d3")));

        let victim = board("4k3/8/8/8/8/3p4/4P3/4K3 w");
        assert!(is_pseudo_legal(&victim, sq("e2"), sq("d3")));
        assert!(is_legal(&victim, sq("e2"), sq("d3")));
    }

    #[test]
    fn pawns_do_not_move_backwards() {
        let b = board("4k3/8/8/3p4/4P3/8/8/4K3 w");
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e3")));
        assert!(is_pseudo_legal(&b, sq("e4"), sq("d5")));
        assert!(is_pseudo_legal(&b, sq("d5"), sq("e4")));
        assert!(!is_pseudo_legal(&b, sq("d5"), sq("d6")));
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let b = board("4P3/8/8/8/8/8/8/k3K3 w");
        assert!(dests(&b, "e8").is_empty());
    }

    #[test]
    fn knight_jumps() {
        let b = Board::startpos();
        assert_eq!(dests(&b, "g1"), vec!["f3", "h3"]);
        assert_eq!(dests(&b, "b8"), vec!["a6", "c6"]);
    }

    #[test]
    fn sliders_on_empty_board() {
        let rook = board("8/8/8/8/3R4/8/8/k6K w");
        assert_eq!(dests(&rook, "d4").len(), 14);

        let bishop = board("8/8/8/8/3B4/8/8/k6K w");
        assert_eq!(dests(&bishop, "d4").len(), 13);

        let queen = board("8/8/8/8/3Q4/8/8/k6K w");
        assert_eq!(dests(&queen, "d4").len(), 27);
    }

    #[test]
    fn sliders_blocked_at_start() {
        let b = Board::startpos();
        for from in ["a1", "c1", "d1", "f1", "h1", "a8", "c8", "d8", "f8", "h8"] {
            assert!(dests(&b, from).is_empty(), "{from} should be boxed in");
        }
    }

    #[test]
    fn slider_stops_at_capture() {
        let b = board("k7/8/8/3p4/8/8/8/K2R4 w");
        assert_eq!(
            dests(&b, "d1"),
            vec!["b1", "c1", "d2", "d3", "d4", "d5", "e1", "f1", "g1", "h1"]
        );
    }

    #[test]
    fn king_steps_one_square() {
        let b = board("8/8/8/8/4K3/8/8/k7 w");
        assert_eq!(dests(&b, "e4").len(), 8);
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e6")));
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e4")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let b = board("k7/8/8/8/8/8/r7/4K3 w");
        assert_eq!(dests(&b, "e1"), vec!["d1", "f1"]);
    }

    #[test]
    fn pinned_piece_stays_on_the_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let b = board("k3r3/8/8/8/8/8/4B3/4K3 w");
        assert!(is_pseudo_legal(&b, sq("e2"), sq("d3")));
        assert!(!is_legal(&b, sq("e2"), sq("d3")));
        assert!(dests(&b, "e2").is_empty());

        // A pinned rook may still slide along the pin.
        let r = board("k3r3/8/8/8/8/8/4R3/4K3 w");
        assert_eq!(dests(&r, "e2"), vec!["e3", "e4", "e5", "e6", "e7", "e8"]);
    }

    #[test]
    fn must_answer_check() {
        // The queen on e7 gives check down the open e-file. White can step
        // aside, block on e3 or take the queen with the bishop.
        let b = board("k7/4q3/8/2B5/8/8/3P1P2/R3K3 w");
        let mut moves: Vec<String> = generate_moves(&b, Color::White)
            .into_iter()
            .map(|m| m.to_uci())
            .collect();
        moves.sort();
        assert_eq!(moves, vec!["c5e3", "c5e7", "e1d1", "e1f1"]);
    }

    #[test]
    fn queries_do_not_change_the_board() {
        let b = board("k3r3/8/8/8/8/8/4B3/4K3 w");
        let before = b;
        let first = legal_destinations(&b, sq("e1"));
        let second = legal_destinations(&b, sq("e1"));
        assert_eq!(first, second);
        assert_eq!(b, before);
    }
}
