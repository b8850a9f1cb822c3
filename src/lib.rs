//! Rotated-bitboard chess engine.
//!
//! - [`board`]: positions, move generation, evaluation and search
//! - [`engine`]: background search worker, deadline timer and time management
//! - [`uci`]: the UCI front end

pub mod board;
pub mod engine;
pub mod uci;
mod zobrist;

pub use board::{Color, Move, MoveInput, Piece, Position, Square};
pub use engine::{EngineController, EngineError};
