//! Score conversion for progress reports.

use super::constants::{CHECKMATE, MATE_WINDOW};

/// Convert an internal score to centipawns given the value of one pawn.
#[must_use]
pub fn centipawns(score: i32, pawn_value: i32) -> i32 {
    (i64::from(score) * 100 / i64::from(pawn_value.max(1))) as i32
}

/// Moves until mate for a root score found by an iteration of `depth` plies.
///
/// Positive when the side to move captures the king, negative when it loses
/// its own. `None` when the score is not a mate score.
#[must_use]
pub fn mate_distance(score: i32, depth: i32) -> Option<i32> {
    let excess = score.abs() - CHECKMATE;
    if excess < -MATE_WINDOW {
        return None;
    }
    // Plies from the root to the king capture
    let plies = depth - excess;
    Some(if score > 0 {
        (plies - 1) / 2
    } else {
        -(plies / 2 - 1)
    })
}
