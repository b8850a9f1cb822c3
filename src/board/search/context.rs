use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::board::state::Position;

use super::{SearchParams, SearchShared};

/// Remembered best reply for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplyHint {
    /// Index into the position's generated move list.
    pub index: usize,
    pub depth: i32,
}

/// Mutable state of one search, reused across the searches of a game.
pub struct SearchContext {
    /// Nodes visited since the context was created.
    pub nodes: u64,
    /// Wall-clock time spent searching since the context was created.
    pub duration: Duration,
    pub(crate) params: SearchParams,
    pub(crate) shared: Arc<SearchShared>,
    pub(crate) replies: HashMap<u64, ReplyHint>,
}

impl Default for SearchContext {
    fn default() -> Self {
        SearchContext::new(SearchParams::default())
    }
}

impl SearchContext {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchContext {
            nodes: 0,
            duration: Duration::ZERO,
            params,
            shared: Arc::new(SearchShared::new()),
            replies: HashMap::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Handle to the state of the search currently bound to this context.
    #[must_use]
    pub fn shared(&self) -> Arc<SearchShared> {
        Arc::clone(&self.shared)
    }

    /// Bind the next search to `shared`.
    pub fn attach(&mut self, shared: Arc<SearchShared>) {
        self.shared = shared;
    }

    /// Forget remembered replies and counters.
    pub fn clear(&mut self) {
        self.replies.clear();
        self.nodes = 0;
        self.duration = Duration::ZERO;
    }

    /// Number of positions with a remembered best reply.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.replies.len()
    }

    #[inline]
    pub(crate) fn stopped(&self) -> bool {
        self.shared.is_stopped()
    }

    /// Map key for `pos`: the hash, complemented when Black is to move.
    #[inline]
    pub(crate) fn tempo_key(pos: &Position) -> u64 {
        if pos.flags().white_to_move() {
            pos.hash()
        } else {
            !pos.hash()
        }
    }

    pub(crate) fn hint(&self, pos: &Position) -> Option<ReplyHint> {
        self.replies.get(&Self::tempo_key(pos)).copied()
    }

    /// Remember `index` unless a deeper result is already stored.
    pub(crate) fn remember(&mut self, pos: &Position, index: usize, depth: i32) {
        let entry = self
            .replies
            .entry(Self::tempo_key(pos))
            .or_insert(ReplyHint { index, depth });
        if entry.depth < depth {
            *entry = ReplyHint { index, depth };
        }
    }
}
