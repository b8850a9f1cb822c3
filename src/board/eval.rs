//! Static evaluation.
//!
//! Scores are in internal units from White's point of view. Each side is
//! scored by the same terms and the difference is returned, so a position and
//! its colour-mirrored twin evaluate to exact negatives.

use super::eval_terms::tables::{
    CENTER_BLOCK, COVERAGE_OCCUPIED, COVERAGE_SQUARE, PAWN_TABLE_ENDGAME, PAWN_TABLE_OPENING,
    PAWN_VALUE,
};
use super::eval_terms::Phase;
use super::state::Position;
use super::types::{squares, Color, Piece};

/// Score of a captured king, before the depth adjustment.
pub const CHECKMATE: i32 = 1_000_000;

impl Position {
    /// Evaluate the position from White's point of view.
    ///
    /// A missing king ends the game: the side still owning its king scores
    /// `CHECKMATE + depth`, so captures found with more depth remaining (that
    /// is, sooner) score higher.
    #[must_use]
    pub fn evaluate(&self, depth: i32) -> i32 {
        if !self.has_king(Color::White) {
            return -(CHECKMATE + depth);
        }
        if !self.has_king(Color::Black) {
            return CHECKMATE + depth;
        }

        let phase = Phase::of(self);
        let openness = (self.occupied & CENTER_BLOCK).count_ones();
        self.side_score(Color::White, phase, openness)
            - self.side_score(Color::Black, phase, openness)
    }

    /// Value of one pawn at the current phase, used to convert scores to centipawns.
    #[must_use]
    pub fn pawn_value(&self) -> i32 {
        Phase::of(self).blend(PAWN_VALUE)
    }

    fn side_score(&self, color: Color, phase: Phase, openness: u32) -> i32 {
        self.eval_pawns(color, phase)
            + self.eval_pawn_structure(color, phase)
            + self.eval_pieces(color, phase, openness)
            + self.eval_king_safety(color, phase)
            + self.eval_coverage(color)
    }

    /// Pawn material and placement from the square tables.
    fn eval_pawns(&self, color: Color, phase: Phase) -> i32 {
        let flip = match color {
            Color::White => 0,
            Color::Black => 56,
        };
        squares(self.pieces_of(Piece::Pawn, color))
            .map(|sq| {
                let idx = sq.index() ^ flip;
                phase.blend((PAWN_TABLE_OPENING[idx], PAWN_TABLE_ENDGAME[idx]))
            })
            .sum()
    }

    /// Attacked squares, with extra credit for attacked occupied squares.
    fn eval_coverage(&self, color: Color) -> i32 {
        let attacks = self.attacks_by(color);
        COVERAGE_SQUARE * attacks.count_ones() as i32
            + COVERAGE_OCCUPIED * (attacks & self.occupied).count_ones() as i32
    }
}
