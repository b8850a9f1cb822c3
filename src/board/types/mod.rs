//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - bit index of a board square
//! - `Bitboard` - file and rank masks, and square iteration over raw masks
//! - `BoardFlags` - side to move and castling gates
//! - `Move`, `MoveInput` and `MoveList` - move representation

mod bitboard;
mod flags;
mod moves;
mod piece;
mod square;

pub use bitboard::{squares, Bitboard, BitboardIter};
pub use flags::BoardFlags;
pub use moves::{Move, MoveInput, MoveList, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;
