//! Engine controller for running searches off the protocol thread.
//!
//! The controller owns the game's [`SearchContext`](crate::board::SearchContext),
//! starts one search at a time on a worker thread, optionally arms a deadline
//! timer, and makes sure the best move is announced exactly once per search.

mod controller;
pub mod time;

use thiserror::Error;

pub use controller::{BestMoveSink, EngineController, SearchJob};
pub use time::{compute_deadline, GoParams};

/// Errors raised while starting a search.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn {thread} thread: {source}")]
    Spawn {
        thread: &'static str,
        #[source]
        source: std::io::Error,
    },
}
