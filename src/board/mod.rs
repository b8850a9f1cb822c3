//! Chess position representation, move generation, evaluation and search.
//!
//! Positions are immutable `Copy` values built on rotated bitboards: sliding
//! attacks come from one table lookup per line. Every move produces a new
//! [`Position`].
//!
//! # Example
//! ```
//! use rotachess::board::Position;
//!
//! let pos = Position::new();
//! let moves = pos.generate_moves();
//! assert_eq!(moves.len(), 20);
//! let next = pos.play(moves[0]);
//! assert_eq!(next.hash(), next.full_hash());
//! ```

pub mod attack_tables;
mod error;
mod eval;
pub mod eval_terms;
mod fen;
mod make_move;
mod movegen;
mod perft;
pub mod search;
mod setup;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, PositionError, SquareError};
pub use eval::CHECKMATE;
pub use fen::START_FEN;
pub use search::{
    centipawns, mate_distance, BestLine, SearchContext, SearchParams, SearchReport,
    SearchReporter, SearchShared,
};
pub use setup::{load_position, new_game};
pub use state::Position;
pub use types::{
    squares, Bitboard, BitboardIter, BoardFlags, Color, Move, MoveInput, MoveList, Piece, Square,
    MAX_MOVES,
};
