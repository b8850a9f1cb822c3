//! Search module implementing principal-variation search with iterative deepening.
//!
//! Features:
//! - Iterative deepening from depth 2, trying the previous best root move first
//! - Negascout with a fail-hard window
//! - Null-move depth reduction
//! - Capture-only quiescence search with stand-pat
//! - Move ordering from a map of remembered best-reply indices
//!
//! A search runs against a [`SearchContext`] that survives between searches
//! (the best-reply map persists until a new game) and publishes its progress
//! through a [`SearchShared`] handle other threads can read and cancel.

mod constants;
mod context;
mod iterative;
mod negascout;
mod params;
mod quiescence;
mod report;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::types::Move;

pub use constants::{CHECKMATE, INFINITY, MATE_WINDOW, MIN_DEPTH};
pub use context::SearchContext;
pub use params::SearchParams;
pub use report::{centipawns, mate_distance};

/// Best root move found so far, with its score as reported to the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestLine {
    pub best_move: Move,
    /// Score in centipawns from the side to move's point of view.
    pub score_cp: i32,
    /// Moves to mate; negative when the side to move is being mated.
    pub mate_in: Option<i32>,
    /// Depth of the iteration that produced this line, 0 before the first one.
    pub depth: u32,
}

impl BestLine {
    /// Placeholder line for `best_move` before any iteration has completed.
    #[must_use]
    pub(crate) fn seed(best_move: Move) -> Self {
        BestLine {
            best_move,
            score_cp: 0,
            mate_in: None,
            depth: 0,
        }
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    pub depth: u32,
    /// Nodes visited during this iteration.
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub score_cp: i32,
    pub mate_in: Option<i32>,
    pub best_move: Move,
}

/// Callback receiving one [`SearchReport`] per completed iteration.
pub type SearchReporter = Arc<dyn Fn(&SearchReport) + Send + Sync>;

/// Search state visible to other threads.
#[derive(Debug, Default)]
pub struct SearchShared {
    stopped: AtomicBool,
    best: Mutex<Option<BestLine>>,
}

impl SearchShared {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Set the stop flag. Returns `true` only for the caller that flipped it,
    /// which becomes responsible for reporting the best move.
    pub fn claim_stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn best(&self) -> Option<BestLine> {
        *self.best.lock()
    }

    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best().map(|line| line.best_move)
    }

    pub(crate) fn set_best(&self, line: BestLine) {
        *self.best.lock() = Some(line);
    }
}
