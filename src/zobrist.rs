//! Zobrist hashing for chess positions.
//!
//! Keys are indexed by `[piece identity][square]`. Identities are laid out so
//! that the colour offset arithmetic works on the empty square too:
//!
//! | row  | identity        |
//! |------|-----------------|
//! | 0    | empty           |
//! | 1-6  | white P N B R Q K |
//! | 7    | empty (same keys as row 0) |
//! | 8-13 | black P N B R Q K |
//!
//! White pieces use offset 0 and black pieces offset 7, and `offset ^ 7` flips
//! the colour while mapping row 0 onto row 7. That gives 13 distinct identities,
//! and all `13 * 64` keys are pairwise distinct.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece};

/// Row of the empty identity for the white offset
pub(crate) const EMPTY_ROW: usize = 0;

pub(crate) struct ZobristKeys {
    pub(crate) keys: [[u64; 64]; 14],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut seen = HashSet::with_capacity(13 * 64);
        let mut keys = [[0u64; 64]; 14];

        for row in [0usize, 1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13] {
            for key in &mut keys[row] {
                *key = loop {
                    let candidate: u64 = rng.gen();
                    if candidate != 0 && seen.insert(candidate) {
                        break candidate;
                    }
                };
            }
        }
        keys[7] = keys[EMPTY_ROW];

        ZobristKeys { keys }
    }

    /// Key for `piece` of `color` on `sq`
    #[inline]
    pub(crate) fn piece(&self, piece: Piece, color: Color, sq: usize) -> u64 {
        self.keys[piece.zobrist_row() + color.zobrist_offset()][sq]
    }

    /// Key for an empty `sq`
    #[inline]
    pub(crate) fn empty(&self, sq: usize) -> u64 {
        self.keys[EMPTY_ROW][sq]
    }

    /// Key by raw row, for callers that already computed `kind + offset`
    #[inline]
    pub(crate) fn row(&self, row: usize, sq: usize) -> u64 {
        self.keys[row][sq]
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
