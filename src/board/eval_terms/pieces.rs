//! Knight, bishop, rook and queen placement.

use crate::board::state::Position;
use crate::board::types::{squares, Bitboard, Color, Piece, Square};

use super::tables::{
    BISHOP_ADJACENT_DIAGONALS, BISHOP_PAIR_BONUS, BISHOP_VALUE, KNIGHT_RIM, KNIGHT_RIM_PENALTY,
    KNIGHT_VALUE, QUEEN_VALUE, ROOK_EDGE_FILES, ROOK_EDGE_PENALTY, ROOK_OPEN_FILE_BONUS,
    ROOK_VALUE,
};
use super::{closed_bonus, open_bonus, Phase};

/// True when two squares lie on neighbouring diagonals in either direction.
fn on_adjacent_diagonals(a: Square, b: Square) -> bool {
    let (ra, fa) = (a.rank() as i32, a.file() as i32);
    let (rb, fb) = (b.rank() as i32, b.file() as i32);
    ((ra - fa) - (rb - fb)).abs() == 1 || ((ra + fa) - (rb + fb)).abs() == 1
}

impl Position {
    /// Material and placement of `color`'s pieces.
    ///
    /// `openness` is the number of occupied squares in the central 4x4 block.
    pub(crate) fn eval_pieces(&self, color: Color, phase: Phase, openness: u32) -> i32 {
        let open = open_bonus(openness);
        let closed = closed_bonus(openness);

        let knights = self.pieces_of(Piece::Knight, color);
        let bishops = self.pieces_of(Piece::Bishop, color);
        let rooks = self.pieces_of(Piece::Rook, color);
        let queens = self.pieces_of(Piece::Queen, color);

        let mut score = (phase.blend(KNIGHT_VALUE) + closed) * knights.count_ones() as i32
            - KNIGHT_RIM_PENALTY * (knights & KNIGHT_RIM).count_ones() as i32;

        score += (phase.blend(BISHOP_VALUE) + open) * bishops.count_ones() as i32;
        if bishops.count_ones() >= 2 {
            score += BISHOP_PAIR_BONUS;
            let mut iter = squares(bishops);
            if let (Some(a), Some(b), None) = (iter.next(), iter.next(), iter.next()) {
                if on_adjacent_diagonals(a, b) {
                    score += BISHOP_ADJACENT_DIAGONALS;
                }
            }
        }

        score += (phase.blend(ROOK_VALUE) + open) * rooks.count_ones() as i32
            - ROOK_EDGE_PENALTY * (rooks & ROOK_EDGE_FILES).count_ones() as i32;
        let pawns = self.pieces(Piece::Pawn);
        for sq in squares(rooks) {
            if Bitboard::file_mask(sq.file()).0 & pawns == 0 {
                score += ROOK_OPEN_FILE_BONUS;
            }
        }

        score + (phase.blend(QUEEN_VALUE) + open) * queens.count_ones() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_position(fen: &str) -> Position {
        fen.parse().expect("valid fen")
    }

    fn sq(name: &str) -> Square {
        name.parse().expect("square")
    }

    #[test]
    fn adjacent_diagonals() {
        assert!(!on_adjacent_diagonals(sq("c1"), sq("f1")));
        assert!(on_adjacent_diagonals(sq("c1"), sq("d1")));
        assert!(on_adjacent_diagonals(sq("a1"), sq("b1")));
        assert!(!on_adjacent_diagonals(sq("c1"), sq("c1")));
    }

    #[test]
    fn rim_knight_is_worse_than_central_knight() {
        let rim = make_position("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        let centre = make_position("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        let (p1, p2) = (Phase::of(&rim), Phase::of(&centre));
        assert_eq!(
            centre.eval_pieces(Color::White, p2, 1) - rim.eval_pieces(Color::White, p1, 1),
            KNIGHT_RIM_PENALTY
        );
    }

    #[test]
    fn bishop_pair_is_rewarded() {
        let pair = make_position("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1");
        let single = make_position("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
        let phase = Phase::of(&pair);
        let gain = pair.eval_pieces(Color::White, phase, 0)
            - single.eval_pieces(Color::White, phase, 0);
        assert_eq!(gain, phase.blend(BISHOP_VALUE) + open_bonus(0) + BISHOP_PAIR_BONUS);
    }

    #[test]
    fn rook_prefers_open_central_file() {
        let open = make_position("4k3/p7/8/8/8/8/P7/3RK3 w - - 0 1");
        let closed = make_position("4k3/p7/8/8/8/8/P7/R3K3 w - - 0 1");
        let phase = Phase::of(&open);
        assert_eq!(
            open.eval_pieces(Color::White, phase, 0) - closed.eval_pieces(Color::White, phase, 0),
            ROOK_EDGE_PENALTY + ROOK_OPEN_FILE_BONUS
        );
    }
}
