//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the rules
//! engine and its front ends:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move requests
//! - FEN parsing for board setup

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser, Placement};
pub use mov::Move;
pub use piece::{ColoredPiece, Piece};
pub use square::Square;
