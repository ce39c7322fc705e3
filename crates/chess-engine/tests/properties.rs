//! Property-based tests over positions reached by random play.

use chess_core::{Move, Square};
use chess_engine::{is_in_check, is_pseudo_legal, legal_destinations, Game};
use proptest::prelude::*;

/// Plays up to `choices.len()` moves, picking each by index among the
/// legal moves, and returns the resulting game.
fn play_out(choices: &[usize]) -> Game {
    let mut game = Game::new();
    for &choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[choice % moves.len()];
        game.request_move(m.from(), m.to())
            .expect("generated move must be accepted");
    }
    game
}

fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: no move is approved onto a square held by the mover's side.
    #[test]
    fn prop_no_self_capture(choices in choices_strategy()) {
        let game = play_out(&choices);
        let board = game.board();
        for (from, mover) in board.pieces() {
            for (to, target) in board.pieces() {
                if target.color == mover.color {
                    prop_assert!(!is_pseudo_legal(board, from, to));
                }
            }
        }
    }

    /// Property: sliders never pass over an occupied square.
    #[test]
    fn prop_sliders_never_jump(choices in choices_strategy()) {
        let game = play_out(&choices);
        let board = game.board();
        for (from, mover) in board.pieces() {
            if !mover.piece.is_slider() {
                continue;
            }
            for to in Square::all() {
                if is_pseudo_legal(board, from, to) {
                    prop_assert!(board.is_path_clear(from, to));
                }
            }
        }
    }

    /// Property: a legal move never leaves the mover's king attacked.
    #[test]
    fn prop_legal_moves_keep_king_safe(choices in choices_strategy()) {
        let game = play_out(&choices);
        let side = game.side_to_move();
        for m in game.legal_moves() {
            let after = game.board().with_move(m);
            prop_assert!(!is_in_check(&after, side), "{} exposes the king", m);
        }
    }

    /// Property: highlight queries leave the board unchanged and repeat
    /// exactly.
    #[test]
    fn prop_queries_are_pure(choices in choices_strategy()) {
        let game = play_out(&choices);
        let before = *game.board();
        for (from, _) in before.pieces() {
            let first = legal_destinations(game.board(), from);
            let second = legal_destinations(game.board(), from);
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(*game.board(), before);
    }

    /// Property: each committed move flips the turn once and records one ply.
    #[test]
    fn prop_turn_flips_per_move(choices in choices_strategy()) {
        let game = play_out(&choices);
        let plies = game.ply_count();
        let expected = if plies % 2 == 0 {
            chess_core::Color::White
        } else {
            chess_core::Color::Black
        };
        prop_assert_eq!(game.side_to_move(), expected);
        prop_assert_eq!(game.selection(), None);
        let history: Vec<Move> = game.move_history().iter().map(|g| g.mov).collect();
        prop_assert_eq!(history.len(), plies);
    }
}
