use crate::board::state::Position;

use super::SearchContext;

impl SearchContext {
    /// Capture-only search below the horizon.
    ///
    /// `depth` keeps decreasing below zero so that a king capture found here
    /// still scores by distance from the root.
    pub fn quiescence(&mut self, pos: &Position, depth: i32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if self.stopped() {
            return 0;
        }

        let stand_pat = pos.side_to_move().sign() * pos.evaluate(depth);
        if stand_pat >= beta {
            return beta;
        }
        if pos.king_count() < 2 {
            return stand_pat.max(alpha);
        }
        alpha = alpha.max(stand_pat);

        for &mv in &pos.generate_captures() {
            let score = -self.quiescence(&pos.play(mv), depth - 1, -beta, -alpha);
            if self.stopped() {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }
        alpha
    }
}
