use std::time::{Duration, Instant};

use crate::board::state::Position;

use super::constants::{INFINITY, MIN_DEPTH};
use super::report::{centipawns, mate_distance};
use super::{BestLine, SearchContext, SearchReport, SearchReporter};

fn nodes_per_second(nodes: u64, elapsed: Duration) -> u64 {
    let micros = elapsed.as_micros() as u64;
    if micros == 0 {
        0
    } else {
        nodes.saturating_mul(1_000_000) / micros
    }
}

impl SearchContext {
    /// Iterative deepening from `root` up to `max_depth` plies (at least two).
    ///
    /// The shared best line is seeded with the first generated move before
    /// any search happens and updated after every completed iteration.
    /// Returns the final best line, or `None` when the root has no moves.
    pub fn search(
        &mut self,
        root: &Position,
        max_depth: u32,
        reporter: Option<&SearchReporter>,
    ) -> Option<BestLine> {
        let started = Instant::now();
        let moves = root.generate_moves();
        let count = moves.len();
        let shared = self.shared();
        let Some(first) = moves.first() else {
            log::debug!("search skipped: no moves at the root");
            return None;
        };
        shared.set_best(BestLine::seed(first));

        let pawn_value = root.pawn_value();
        let deepest = max_depth.max(MIN_DEPTH);
        let line = |index: usize, score: i32, depth: u32| BestLine {
            best_move: moves[index],
            score_cp: centipawns(score, pawn_value),
            mate_in: mate_distance(score, depth as i32),
            depth,
        };
        log::debug!("search started: {count} root moves, depth cap {deepest}");

        let mut pv_index = 0;
        let mut completed_score: Option<i32> = None;

        for depth in MIN_DEPTH..=deepest {
            let iteration_start = Instant::now();
            let nodes_before = self.nodes;
            let remaining = depth as i32 - 1;
            let mut alpha = -INFINITY;
            let mut best: Option<(usize, i32)> = None;

            for k in 0..count {
                let index = (pv_index + k) % count;
                let child = root.play(moves[index]);
                let score = if k == 0 {
                    -self.negascout(&child, remaining, -INFINITY, INFINITY, true)
                } else {
                    let probe = -self.negascout(&child, remaining, -alpha - 1, -alpha, true);
                    if probe > alpha {
                        -self.negascout(&child, remaining, -INFINITY, INFINITY, true)
                    } else {
                        probe
                    }
                };
                if self.stopped() {
                    break;
                }
                if best.is_none() || score > alpha {
                    alpha = score;
                    best = Some((index, score));
                }
            }

            if self.stopped() {
                if let Some((index, score)) = best {
                    if completed_score.map_or(true, |previous| score > previous) {
                        shared.set_best(line(index, score, depth));
                    }
                }
                log::debug!("depth {depth} interrupted");
                break;
            }

            let Some((index, score)) = best else {
                break;
            };
            completed_score = Some(score);
            pv_index = index;
            let result = line(index, score, depth);
            shared.set_best(result);

            let elapsed = iteration_start.elapsed();
            let nodes = self.nodes - nodes_before;
            let report = SearchReport {
                depth,
                nodes,
                nps: nodes_per_second(nodes, elapsed),
                time_ms: elapsed.as_millis() as u64,
                score_cp: result.score_cp,
                mate_in: result.mate_in,
                best_move: result.best_move,
            };
            log::debug!(
                "depth {} best {} score {} nodes {} time {}ms",
                depth,
                report.best_move,
                score,
                nodes,
                report.time_ms
            );
            if let Some(reporter) = reporter {
                reporter(&report);
            }
        }

        self.duration += started.elapsed();
        shared.best()
    }
}
