//! Time management for `go` commands.
//!
//! Turns the clock fields of a `go` command into a depth cap and an optional
//! deadline for the controller's timer.

use std::time::{Duration, Instant};

use crate::board::{Color, SearchParams};

/// Search limits sent with a `go` command. Times are in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movestogo: Option<u64>,
    pub movetime: Option<u64>,
    pub depth: Option<u32>,
    pub infinite: bool,
}

impl GoParams {
    /// Remaining time and increment of `side`.
    #[must_use]
    pub fn clock(&self, side: Color) -> (Option<u64>, u64) {
        match side {
            Color::White => (self.wtime, self.winc.unwrap_or(0)),
            Color::Black => (self.btime, self.binc.unwrap_or(0)),
        }
    }

    /// Iterative-deepening cap: the requested depth or the configured default.
    #[must_use]
    pub fn max_depth(&self, params: &SearchParams) -> u32 {
        self.depth.unwrap_or(params.max_depth)
    }

    /// Milliseconds `side` may spend on this move, `None` for no time limit.
    #[must_use]
    pub fn budget_ms(&self, side: Color, params: &SearchParams) -> Option<u64> {
        if self.infinite {
            return None;
        }
        if let Some(movetime) = self.movetime {
            return Some(movetime.saturating_sub(params.time_margin_ms));
        }
        let (remaining, increment) = self.clock(side);
        let moves_to_go = self
            .movestogo
            .filter(|&n| n > 0)
            .unwrap_or(params.default_moves_to_go)
            .max(1);
        remaining.map(|time| (time / moves_to_go + increment).saturating_sub(params.time_margin_ms))
    }
}

/// Deadline for a search started at `start`, or `None` when only the depth cap applies.
#[must_use]
pub fn compute_deadline(
    go: &GoParams,
    side: Color,
    params: &SearchParams,
    start: Instant,
) -> Option<Instant> {
    go.budget_ms(side, params)
        .map(|ms| start + Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movetime_keeps_a_margin() {
        let go = GoParams {
            movetime: Some(1000),
            wtime: Some(60_000),
            ..GoParams::default()
        };
        assert_eq!(go.budget_ms(Color::White, &SearchParams::default()), Some(950));
    }

    #[test]
    fn clock_is_split_over_moves_to_go() {
        let params = SearchParams::default();
        let go = GoParams {
            wtime: Some(60_000),
            btime: Some(30_000),
            winc: Some(1000),
            ..GoParams::default()
        };
        assert_eq!(go.budget_ms(Color::White, &params), Some(2000 + 1000 - 50));
        assert_eq!(go.budget_ms(Color::Black, &params), Some(1000 - 50));

        let go = GoParams {
            btime: Some(10_000),
            movestogo: Some(5),
            ..GoParams::default()
        };
        assert_eq!(go.budget_ms(Color::Black, &params), Some(1950));
    }

    #[test]
    fn no_clock_means_no_deadline() {
        let params = SearchParams::default();
        let start = Instant::now();
        let depth_only = GoParams {
            depth: Some(6),
            ..GoParams::default()
        };
        assert_eq!(compute_deadline(&depth_only, Color::White, &params, start), None);
        assert_eq!(depth_only.max_depth(&params), 6);

        let infinite = GoParams {
            infinite: true,
            wtime: Some(1000),
            ..GoParams::default()
        };
        assert_eq!(compute_deadline(&infinite, Color::White, &params, start), None);
        assert_eq!(infinite.max_depth(&params), 50);
    }

    #[test]
    fn tiny_clock_saturates_to_now() {
        let params = SearchParams::default();
        let start = Instant::now();
        let go = GoParams {
            wtime: Some(30),
            ..GoParams::default()
        };
        assert_eq!(compute_deadline(&go, Color::White, &params, start), Some(start));
    }
}
