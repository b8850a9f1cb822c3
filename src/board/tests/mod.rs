//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_move.rs` - Position transitions and incremental hashing
//! - `movegen.rs` - Pseudo-legal generation and king capture
//! - `perft.rs` - Move-path counts from known positions
//! - `search.rs` - Negascout bounds and mate finding
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("square")
}

pub(super) fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("valid FEN")
}
