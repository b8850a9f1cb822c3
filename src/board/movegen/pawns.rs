//! Pawn pushes and captures as masked shifts.

use super::super::state::Position;
use super::super::types::{Bitboard, Color};

const WHITE_START_RANK: u64 = Bitboard::RANK_2.0;
const BLACK_START_RANK: u64 = Bitboard::RANK_7.0;

impl Position {
    /// Destinations of the pawn(s) in `pawns` belonging to `color`.
    ///
    /// Diagonal captures are clipped at the board edge and land only on enemy
    /// pieces or the en-passant target. A double push needs both the crossed
    /// and the destination square empty.
    #[inline]
    pub(crate) fn pawn_destinations(&self, pawns: u64, color: Color) -> u64 {
        let empty = !self.occupied;
        match color {
            Color::White => {
                let targets = self.black | self.en_passant;
                let captures = (((pawns & Bitboard::NOT_FILE_A) << 7)
                    | ((pawns & Bitboard::NOT_FILE_H) << 9))
                    & targets;
                let single = (pawns << 8) & empty;
                let double = ((pawns & WHITE_START_RANK) << 16) & empty & !(self.occupied << 8);
                captures | single | double
            }
            Color::Black => {
                let targets = self.white | self.en_passant;
                let captures = (((pawns & Bitboard::NOT_FILE_A) >> 9)
                    | ((pawns & Bitboard::NOT_FILE_H) >> 7))
                    & targets;
                let single = (pawns >> 8) & empty;
                let double = ((pawns & BLACK_START_RANK) >> 16) & empty & !(self.occupied >> 8);
                captures | single | double
            }
        }
    }
}
