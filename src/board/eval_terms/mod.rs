//! Evaluation terms.
//!
//! Contains the per-side scoring pieces used by [`Position::evaluate`]:
//! - Game phase and opening/endgame blending
//! - Pawn structure (passed, connected, doubled)
//! - Piece placement for knights, bishops, rooks and queens
//! - King safety
//!
//! [`Position::evaluate`]: crate::board::Position::evaluate

mod king_safety;
mod pawn_structure;
mod pieces;
pub mod tables;

use crate::board::state::Position;
use crate::board::types::Piece;

use tables::{
    BISHOP_VALUE, ENDGAME_LIMIT, KNIGHT_VALUE, MIDGAME_LIMIT, QUEEN_VALUE, ROOK_VALUE,
};

pub use pawn_structure::PawnStructure;

/// Weight of the endgame value, 0 (pure opening) to 256 (pure endgame).
pub const PHASE_MAX: i32 = 256;

/// How far the game has progressed, derived from non-pawn material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub weight: i32,
    pub opening: bool,
    pub endgame: bool,
}

impl Phase {
    /// Phase from the opening values of all knights, bishops, rooks and queens on the board.
    #[must_use]
    pub fn of(pos: &Position) -> Phase {
        let material: i32 = [
            (Piece::Knight, KNIGHT_VALUE.0),
            (Piece::Bishop, BISHOP_VALUE.0),
            (Piece::Rook, ROOK_VALUE.0),
            (Piece::Queen, QUEEN_VALUE.0),
        ]
        .iter()
        .map(|&(kind, value)| pos.pieces(kind).count_ones() as i32 * value)
        .sum();
        Phase::from_material(material)
    }

    #[must_use]
    pub fn from_material(material: i32) -> Phase {
        let opening = material > MIDGAME_LIMIT;
        let endgame = material <= ENDGAME_LIMIT;
        let weight = if opening {
            0
        } else if endgame {
            PHASE_MAX
        } else {
            (MIDGAME_LIMIT - material) * PHASE_MAX / (MIDGAME_LIMIT - ENDGAME_LIMIT)
        };
        Phase {
            weight,
            opening,
            endgame,
        }
    }

    /// Blend an `(opening, endgame)` pair by this phase.
    #[inline]
    #[must_use]
    pub fn blend(self, (opening, endgame): (i32, i32)) -> i32 {
        opening + (((endgame - opening) * self.weight) >> 8)
    }
}

/// Bonus for long-range pieces when few central squares are occupied.
#[inline]
pub(crate) fn open_bonus(openness: u32) -> i32 {
    match openness {
        0..=4 => tables::OPEN_BONUS_HIGH,
        5..=6 => tables::OPEN_BONUS_LOW,
        _ => 0,
    }
}

/// Bonus for knights when the centre is crowded.
#[inline]
pub(crate) fn closed_bonus(openness: u32) -> i32 {
    match openness {
        10.. => tables::OPEN_BONUS_HIGH,
        8..=9 => tables::OPEN_BONUS_LOW,
        _ => 0,
    }
}
