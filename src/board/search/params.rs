#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable search and time-management settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Deepest iteration when `go` names no depth.
    pub max_depth: u32,
    /// Null-move reduction is tried only above this depth.
    pub null_min_depth: i32,
    pub null_reduction: i32,
    /// Reduction used instead of `null_reduction` above `null_deep_threshold`.
    pub null_reduction_deep: i32,
    pub null_deep_threshold: i32,
    /// Depth removed when the null-move search fails high.
    pub null_depth_cut: i32,
    /// Milliseconds held back from every time budget.
    pub time_margin_ms: u64,
    pub default_moves_to_go: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: 50,
            null_min_depth: 3,
            null_reduction: 3,
            null_reduction_deep: 4,
            null_deep_threshold: 6,
            null_depth_cut: 3,
            time_margin_ms: 50,
            default_moves_to_go: 30,
        }
    }
}

impl SearchParams {
    /// Null-move reduction `R` for a node at `depth`.
    #[inline]
    #[must_use]
    pub fn null_reduction_at(&self, depth: i32) -> i32 {
        if depth > self.null_deep_threshold {
            self.null_reduction_deep
        } else {
            self.null_reduction
        }
    }
}
