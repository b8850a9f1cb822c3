//! King safety evaluation.
//!
//! Rewards pressure on the enemy king's ring, a pawn shelter once the
//! opening is over, and a king tucked into a corner before the endgame.

use crate::board::attack_tables::king_attacks;
use crate::board::state::Position;
use crate::board::types::{Color, Piece};

use super::tables::{
    BLACK_KING_WINGS, KING_RING_ATTACK, KING_SHELTER_PAWN, KING_WING_BONUS, WHITE_KING_WINGS,
};
use super::Phase;

impl Position {
    /// King safety score for `color`. Zero when either king is missing.
    pub(crate) fn eval_king_safety(&self, color: Color, phase: Phase) -> i32 {
        let king = self.pieces_of(Piece::King, color);
        let enemy_king = self.pieces_of(Piece::King, color.opponent());
        if king == 0 || enemy_king == 0 {
            return 0;
        }
        let own_ring = king_attacks(king.trailing_zeros() as usize);
        let enemy_ring = king_attacks(enemy_king.trailing_zeros() as usize);

        let ring_hits = (enemy_ring & self.attacks_by(color)).count_ones() as i32;
        let mut score = KING_RING_ATTACK * ring_hits;
        if !phase.opening {
            let shelter = own_ring & self.pieces_of(Piece::Pawn, color);
            score += KING_SHELTER_PAWN * shelter.count_ones() as i32;
        }
        if !phase.endgame {
            let wings = match color {
                Color::White => WHITE_KING_WINGS,
                Color::Black => BLACK_KING_WINGS,
            };
            if king & wings != 0 {
                score += KING_WING_BONUS;
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_position(fen: &str) -> Position {
        fen.parse().expect("valid fen")
    }

    #[test]
    fn castled_king_beats_central_king_in_the_opening() {
        let castled = make_position("rnbq1rk1/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1RK1 w - - 0 1");
        let phase = Phase::of(&castled);
        assert!(phase.opening);
        assert_eq!(castled.eval_king_safety(Color::White, phase), KING_WING_BONUS);
        assert_eq!(castled.eval_king_safety(Color::Black, phase), KING_WING_BONUS);

        let central = Position::new();
        assert_eq!(central.eval_king_safety(Color::White, Phase::of(&central)), 0);
    }

    #[test]
    fn shelter_counts_outside_the_opening() {
        let pos = make_position("6k1/8/8/8/8/8/5PPP/6K1 w - - 0 1");
        let phase = Phase::of(&pos);
        assert!(phase.endgame);
        assert_eq!(pos.eval_king_safety(Color::White, phase), 3 * KING_SHELTER_PAWN);
    }

    #[test]
    fn ring_pressure() {
        // Rook on the seventh covers f7, g7 and h7 next to the black king
        let pos = make_position("6k1/R7/8/8/8/8/8/K7 w - - 0 1");
        let phase = Phase::of(&pos);
        assert_eq!(pos.eval_king_safety(Color::White, phase), 3 * KING_RING_ATTACK);
    }

    #[test]
    fn missing_king_scores_nothing() {
        let pos = make_position("4k3/4Q3/8/8/8/8/8/4K3 w - - 0 1");
        let e7 = "e7".parse().expect("e7");
        let e8 = "e8".parse().expect("e8");
        let taken = pos.apply_move(e7, e8, Piece::Queen);
        assert_eq!(taken.king_count(), 1);
        assert_eq!(taken.eval_king_safety(Color::White, Phase::of(&taken)), 0);
    }
}
