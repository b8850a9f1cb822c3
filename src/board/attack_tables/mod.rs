//! Attack tables for move generation.
//!
//! Sliding attacks use rotated bitboards: each position caches its occupancy
//! in four orientations (plain, flipped across a1-h8, and pseudo-rotated 45
//! degrees each way). In the right orientation every rank, file and diagonal
//! is a contiguous run of at most eight bits, so the attacks along it are a
//! single table lookup indexed by that run.

#![allow(clippy::inline_always)] // Performance-critical hot path functions

mod tables;
mod transforms;

use once_cell::sync::Lazy;

pub use transforms::{flip_a1h8, rotate_45_anticlockwise, rotate_45_clockwise};

use tables::{
    ANTI_DIAGONAL_ATTACKS, DIAGONAL_ATTACKS, FILE_ATTACKS, KING_ATTACKS, KNIGHT_ATTACKS,
    RANK_ATTACKS,
};

const NOT_FILE_A: u64 = 0xFEFE_FEFE_FEFE_FEFE;
const NOT_FILE_H: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Rook-style attacks from `sq`.
///
/// `occupancy` is the plain board occupancy, `flipped` the same occupancy
/// reflected across the a1-h8 diagonal.
#[inline(always)]
#[must_use]
pub fn straight_attacks(occupancy: u64, flipped: u64, sq: usize) -> u64 {
    RANK_ATTACKS.lookup(occupancy, sq) | FILE_ATTACKS.lookup(flipped, sq)
}

/// Bishop-style attacks from `sq`, from the two 45-degree rotated occupancies.
#[inline(always)]
#[must_use]
pub fn diagonal_attacks(rotated_clockwise: u64, rotated_anticlockwise: u64, sq: usize) -> u64 {
    DIAGONAL_ATTACKS.lookup(rotated_clockwise, sq)
        | ANTI_DIAGONAL_ATTACKS.lookup(rotated_anticlockwise, sq)
}

#[inline(always)]
#[must_use]
pub fn knight_attacks(sq: usize) -> u64 {
    KNIGHT_ATTACKS[sq]
}

#[inline(always)]
#[must_use]
pub fn king_attacks(sq: usize) -> u64 {
    KING_ATTACKS[sq]
}

/// Squares attacked diagonally by a set of white pawns.
#[inline(always)]
#[must_use]
pub fn white_pawn_attacks(pawns: u64) -> u64 {
    ((pawns & NOT_FILE_H) << 9) | ((pawns & NOT_FILE_A) << 7)
}

/// Squares attacked diagonally by a set of black pawns.
#[inline(always)]
#[must_use]
pub fn black_pawn_attacks(pawns: u64) -> u64 {
    ((pawns & NOT_FILE_H) >> 7) | ((pawns & NOT_FILE_A) >> 9)
}

/// Force construction of every table.
///
/// Tables are built lazily on first use; calling this up front keeps the
/// construction cost out of the first search.
pub fn init() {
    Lazy::force(&RANK_ATTACKS);
    Lazy::force(&FILE_ATTACKS);
    Lazy::force(&DIAGONAL_ATTACKS);
    Lazy::force(&ANTI_DIAGONAL_ATTACKS);
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
}

const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

fn walk_rays(occupancy: u64, sq: usize, directions: &[(isize, isize); 4]) -> u64 {
    let rank = (sq / 8) as isize;
    let file = (sq % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in directions {
        let (mut r, mut f) = (rank + dr, file + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Reference rook attacks computed by walking each ray square by square.
#[must_use]
pub fn straight_attacks_by_walk(occupancy: u64, sq: usize) -> u64 {
    walk_rays(occupancy, sq, &STRAIGHT_DIRECTIONS)
}

/// Reference bishop attacks computed by walking each ray square by square.
#[must_use]
pub fn diagonal_attacks_by_walk(occupancy: u64, sq: usize) -> u64 {
    walk_rays(occupancy, sq, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        for sq in 0..64 {
            let a = straight_attacks(0, 0, sq);
            assert_eq!(a.count_ones(), 14, "square {sq}");
        }
    }

    #[test]
    fn bishop_on_d4_is_blocked_by_neighbours() {
        let sq = 27;
        let occ = (1u64 << 36) | (1u64 << 18) | (1u64 << 20) | (1u64 << 34) | (1u64 << sq);
        let a = diagonal_attacks(rotate_45_clockwise(occ), rotate_45_anticlockwise(occ), sq);
        assert_eq!(a, (1u64 << 36) | (1u64 << 18) | (1u64 << 20) | (1u64 << 34));
    }

    #[test]
    fn lookups_match_ray_walk_for_random_boards() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..1000 {
            let sq = rng.gen_range(0..64);
            let occ = (rng.gen::<u64>() & rng.gen::<u64>()) | (1u64 << sq);
            assert_eq!(
                straight_attacks(occ, flip_a1h8(occ), sq),
                straight_attacks_by_walk(occ, sq),
                "straight {sq} {occ:#x}"
            );
            assert_eq!(
                diagonal_attacks(rotate_45_clockwise(occ), rotate_45_anticlockwise(occ), sq),
                diagonal_attacks_by_walk(occ, sq),
                "diagonal {sq} {occ:#x}"
            );
        }
    }

    #[test]
    fn pawn_attacks_do_not_wrap() {
        let a_and_h = (1u64 << 8) | (1u64 << 15);
        assert_eq!(white_pawn_attacks(a_and_h), (1u64 << 17) | (1u64 << 22));
        assert_eq!(black_pawn_attacks(a_and_h), (1u64 << 1) | (1u64 << 6));
    }
}
