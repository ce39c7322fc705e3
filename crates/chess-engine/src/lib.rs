//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 piece grid and path checking
//! - [`Position`] - board plus side to move, with FEN setup
//! - [`movegen`] - pseudo-legal and legal move validation
//! - [`check`] - check, checkmate and stalemate detection
//! - [`RuleSet`] - the seam between a game session and its rules
//! - [`Game`] - a game session with selection, history and status
//! - [`Snapshot`] - the serializable state a view renders
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for m in ["f2f3", "e7e5", "g2g4"] {
//!     game.make_move_uci(m).unwrap();
//! }
//! let outcome = game.make_move_uci("d8h4").unwrap();
//! assert!(matches!(outcome.status, GameStatus::Checkmate { .. }));
//! println!("{}", outcome.status);
//! ```

mod board;
pub mod check;
mod game;
pub mod movegen;
mod position;
pub mod rules;
mod snapshot;

pub use board::Board;
pub use check::{classify, find_king, has_legal_moves, is_in_check, GameStatus};
pub use game::{Game, GameError, GameMove, MoveOutcome};
pub use movegen::{generate_moves, is_legal, is_pseudo_legal, legal_destinations};
pub use position::Position;
pub use rules::{RuleSet, StandardChess};
pub use snapshot::{Cell, Snapshot};
