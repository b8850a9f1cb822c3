//! Castling destinations.
//!
//! Ordinary king steps are not filtered against attacked squares; a king that
//! walks into an attack is simply captured on the next ply.

use super::super::state::Position;
use super::super::types::{BoardFlags, Color};

struct CastleRule {
    gates: u64,
    must_be_empty: u64,
    must_be_safe: u64,
    target: u64,
}

const WHITE_QUEENSIDE: CastleRule = CastleRule {
    gates: BoardFlags::E1 | BoardFlags::A1,
    must_be_empty: 0x0E,
    must_be_safe: 0x1C,
    target: 0x04,
};
const WHITE_KINGSIDE: CastleRule = CastleRule {
    gates: BoardFlags::E1 | BoardFlags::H1,
    must_be_empty: 0x60,
    must_be_safe: 0x70,
    target: 0x40,
};
const BLACK_QUEENSIDE: CastleRule = CastleRule {
    gates: BoardFlags::E8 | BoardFlags::A8,
    must_be_empty: 0x0E00_0000_0000_0000,
    must_be_safe: 0x1C00_0000_0000_0000,
    target: 0x0400_0000_0000_0000,
};
const BLACK_KINGSIDE: CastleRule = CastleRule {
    gates: BoardFlags::E8 | BoardFlags::H8,
    must_be_empty: 0x6000_0000_0000_0000,
    must_be_safe: 0x7000_0000_0000_0000,
    target: 0x4000_0000_0000_0000,
};

impl Position {
    /// King destinations reachable by castling for `color`.
    ///
    /// Castling needs the king and rook unmoved, the squares between them
    /// empty, and the king's start, transit and destination squares unattacked.
    pub(crate) fn castling_destinations(&self, color: Color) -> u64 {
        let (rules, enemy_attacks) = match color {
            Color::White => ([WHITE_QUEENSIDE, WHITE_KINGSIDE], self.black_attacks),
            Color::Black => ([BLACK_QUEENSIDE, BLACK_KINGSIDE], self.white_attacks),
        };
        rules
            .iter()
            .filter(|rule| {
                !self.flags.any(rule.gates)
                    && self.occupied & rule.must_be_empty == 0
                    && enemy_attacks & rule.must_be_safe == 0
            })
            .fold(0, |acc, rule| acc | rule.target)
    }
}
