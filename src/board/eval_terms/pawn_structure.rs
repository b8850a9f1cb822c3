//! Pawn structure evaluation.
//!
//! Counts passed, connected and doubled pawns per side. Masks are built once
//! and indexed by colour then square.

use once_cell::sync::Lazy;

use crate::board::state::Position;
use crate::board::types::{squares, Bitboard, Color, Piece};

use super::tables::{CONNECTED_BONUS, DOUBLED_PENALTY, PASSED_BONUS};
use super::Phase;

struct PawnMasks {
    /// Same and adjacent files, strictly ahead of the pawn.
    passed: [[u64; 64]; 2],
    /// Same file, strictly ahead of the pawn.
    ahead: [[u64; 64]; 2],
    /// Adjacent files, one rank behind through one rank ahead.
    neighbours: [u64; 64],
}

static PAWN_MASKS: Lazy<PawnMasks> = Lazy::new(|| {
    let mut masks = PawnMasks {
        passed: [[0; 64]; 2],
        ahead: [[0; 64]; 2],
        neighbours: [0; 64],
    };
    for sq in 0..64 {
        let (rank, file) = (sq / 8, sq % 8);
        let file_bits = Bitboard::file_mask(file).0;
        let adjacent =
            ((file_bits << 1) & Bitboard::NOT_FILE_A) | ((file_bits >> 1) & Bitboard::NOT_FILE_H);

        let above: u64 = (rank + 1..8).map(|r| Bitboard::rank_mask(r).0).fold(0, |a, b| a | b);
        let below: u64 = (0..rank).map(|r| Bitboard::rank_mask(r).0).fold(0, |a, b| a | b);
        let near: u64 = (rank.saturating_sub(1)..=(rank + 1).min(7))
            .map(|r| Bitboard::rank_mask(r).0)
            .fold(0, |a, b| a | b);

        for (color, forward) in [(Color::White, above), (Color::Black, below)] {
            masks.ahead[color as usize][sq] = file_bits & forward;
            masks.passed[color as usize][sq] = (file_bits | adjacent) & forward;
        }
        masks.neighbours[sq] = adjacent & near;
    }
    masks
});

/// Pawn-structure counts for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnStructure {
    /// Pawns with no enemy pawn ahead on their own or an adjacent file.
    pub passed: u32,
    /// Pawns with a friendly pawn diagonally or orthogonally beside them.
    pub connected: u32,
    /// Pawns with a friendly pawn ahead on the same file.
    pub doubled: u32,
}

impl Position {
    /// Count passed, connected and doubled pawns for `color`.
    #[must_use]
    pub fn pawn_structure(&self, color: Color) -> PawnStructure {
        let own = self.pieces_of(Piece::Pawn, color);
        let enemy = self.pieces_of(Piece::Pawn, color.opponent());
        let masks = &*PAWN_MASKS;
        let side = color as usize;

        let mut counts = PawnStructure::default();
        for sq in squares(own) {
            let idx = sq.index();
            if masks.passed[side][idx] & enemy == 0 {
                counts.passed += 1;
            }
            if masks.neighbours[idx] & own != 0 {
                counts.connected += 1;
            }
            if masks.ahead[side][idx] & own != 0 {
                counts.doubled += 1;
            }
        }
        counts
    }

    /// Pawn-structure score for `color`.
    ///
    /// Doubled pawns of the opponent count in `color`'s favour.
    pub(crate) fn eval_pawn_structure(&self, color: Color, phase: Phase) -> i32 {
        let own = self.pawn_structure(color);
        let theirs = self.pawn_structure(color.opponent());
        phase.blend(PASSED_BONUS) * own.passed as i32
            + phase.blend(CONNECTED_BONUS) * own.connected as i32
            + phase.blend(DOUBLED_PENALTY) * theirs.doubled as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_position(fen: &str) -> Position {
        fen.parse().expect("valid fen")
    }

    #[test]
    fn start_position_has_no_passers() {
        let pos = Position::new();
        for color in Color::BOTH {
            let counts = pos.pawn_structure(color);
            assert_eq!(counts.passed, 0);
            assert_eq!(counts.doubled, 0);
            assert_eq!(counts.connected, 8);
        }
    }

    #[test]
    fn lone_pawn_is_passed() {
        let pos = make_position("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            pos.pawn_structure(Color::White),
            PawnStructure {
                passed: 1,
                connected: 0,
                doubled: 0
            }
        );
    }

    #[test]
    fn adjacent_enemy_pawn_blocks_passer() {
        let pos = make_position("4k3/4p3/8/3P4/8/8/8/4K3 w - - 0 1");
        assert_eq!(pos.pawn_structure(Color::White).passed, 0);
        // e7 has nothing in front of it
        assert_eq!(pos.pawn_structure(Color::Black).passed, 1);
    }

    #[test]
    fn doubled_pawns_count_the_rear_pawn() {
        let pos = make_position("4k3/8/8/3P4/3P4/8/8/4K3 w - - 0 1");
        let counts = pos.pawn_structure(Color::White);
        assert_eq!(counts.doubled, 1);
        assert_eq!(counts.connected, 0);
        assert_eq!(counts.passed, 2);
    }

    #[test]
    fn edge_files_do_not_wrap() {
        let pos = make_position("4k3/8/8/7P/P7/8/8/4K3 w - - 0 1");
        assert_eq!(pos.pawn_structure(Color::White).connected, 0);
    }

    #[test]
    fn doubled_penalty_goes_to_the_opponent() {
        let pos = make_position("4k3/8/8/3P4/3P4/8/8/4K3 w - - 0 1");
        let phase = Phase::of(&pos);
        assert_eq!(pos.eval_pawn_structure(Color::Black, phase), phase.blend(DOUBLED_PENALTY));
    }
}
