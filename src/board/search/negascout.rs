use crate::board::state::Position;

use super::constants::CHECKMATE;
use super::SearchContext;

impl SearchContext {
    /// Fail-hard principal-variation search of `pos` to `depth` plies.
    ///
    /// Returns a score relative to the side to move, clamped to
    /// `[alpha, beta]` whenever both kings are on the board. A position
    /// missing a king returns the mate sentinel `CHECKMATE + depth`, negated
    /// when the side to move is the one without its king. After cancellation
    /// the return value is meaningless.
    pub fn negascout(
        &mut self,
        pos: &Position,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        allow_null: bool,
    ) -> i32 {
        self.nodes += 1;
        if self.stopped() {
            return 0;
        }

        let us = pos.side_to_move();
        if pos.king_count() < 2 {
            let score = CHECKMATE + depth;
            return if pos.has_king(us) { score } else { -score };
        }
        if depth <= 0 {
            return self.quiescence(pos, depth, alpha, beta);
        }

        let mut depth = depth;
        if allow_null
            && depth > self.params.null_min_depth
            && !pos.in_check()
            && pos.has_non_pawn_material(us)
        {
            let reduction = self.params.null_reduction_at(depth);
            let score = -self.negascout(
                &pos.null_move(),
                depth - reduction - 1,
                -beta,
                -beta + 1,
                false,
            );
            if self.stopped() {
                return 0;
            }
            if score >= beta {
                depth -= self.params.null_depth_cut;
                if depth <= 0 {
                    return self.quiescence(pos, depth, alpha, beta);
                }
            }
        }

        let moves = pos.generate_moves();
        if moves.is_empty() {
            return self.quiescence(pos, depth, alpha, beta);
        }

        let count = moves.len();
        let hint = self.hint(pos).map(|h| h.index).filter(|&i| i < count);
        let start = hint.unwrap_or(0);
        let mut best = start;
        let mut cutoff = false;

        for k in 0..count {
            let index = (start + k) % count;
            let child = pos.play(moves[index]);
            let score = if hint.is_some() && k > 0 {
                let probe = -self.negascout(&child, depth - 1, -alpha - 1, -alpha, true);
                if alpha < probe && probe < beta {
                    -self.negascout(&child, depth - 1, -beta, -alpha, true)
                } else {
                    probe
                }
            } else {
                -self.negascout(&child, depth - 1, -beta, -alpha, true)
            };
            if self.stopped() {
                return 0;
            }
            if score >= beta {
                best = index;
                cutoff = true;
                break;
            }
            if score > alpha {
                alpha = score;
                best = index;
            }
        }

        self.remember(pos, best, depth);
        if cutoff {
            beta
        } else {
            alpha
        }
    }
}
