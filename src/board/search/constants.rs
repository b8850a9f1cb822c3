//! Search constants.

pub use crate::board::eval::CHECKMATE;

/// Larger than any score the search can produce; negation never overflows.
pub const INFINITY: i32 = 2 * CHECKMATE;

/// Scores within this many plies of the mate sentinel are reported as mates.
pub const MATE_WINDOW: i32 = 64;

/// Iterative deepening starts here and always runs at least this deep.
pub const MIN_DEPTH: u32 = 2;
