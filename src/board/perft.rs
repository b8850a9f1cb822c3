//! Move-path enumeration for testing and benchmarking the generator.

use super::state::Position;

impl Position {
    /// Count the leaf nodes of the pseudo-legal move tree to `depth` plies.
    ///
    /// Positions in which a king has been captured are leaves and are not
    /// expanded further.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| {
                let next = self.play(mv);
                if next.king_count() < 2 {
                    1
                } else {
                    next.perft(depth - 1)
                }
            })
            .sum()
    }

    /// Per-move leaf counts at `depth`, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(super::types::Move, u64)> {
        self.generate_moves()
            .iter()
            .map(|&mv| {
                let next = self.play(mv);
                let nodes = if depth <= 1 || next.king_count() < 2 {
                    1
                } else {
                    next.perft(depth - 1)
                };
                (mv, nodes)
            })
            .collect()
    }
}
