//! Engine controller implementation.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::board::{
    BestLine, Move, Position, SearchContext, SearchParams, SearchReporter, SearchShared,
};

use super::EngineError;

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Maximum sleep duration when polling the deadline
const MAX_POLL_SLEEP_MS: u64 = 5;

/// Receives the best move once per search, `None` when the root had no moves.
pub type BestMoveSink = Arc<dyn Fn(Option<Move>) + Send + Sync>;

/// Stop the search and announce its best move, unless another thread already did.
fn finish(shared: &SearchShared, sink: &BestMoveSink) -> bool {
    if shared.claim_stop() {
        sink(shared.best_move());
        true
    } else {
        false
    }
}

/// Active search job state
pub struct SearchJob {
    shared: Arc<SearchShared>,
    sink: BestMoveSink,
    /// Handle to the search thread
    handle: JoinHandle<()>,
    /// Optional handle to the deadline timer thread
    timer_handle: Option<JoinHandle<()>>,
}

impl SearchJob {
    /// Progress and stop flag of this search.
    #[must_use]
    pub fn shared(&self) -> &Arc<SearchShared> {
        &self.shared
    }

    /// Stop the search without waiting. Returns `true` when this call
    /// announced the best move.
    pub fn cancel(&self) -> bool {
        let announced = finish(&self.shared, &self.sink);
        if announced {
            log::info!("search cancelled");
        }
        announced
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and timer threads to exit.
    pub fn wait(self) {
        if self.handle.join().is_err() {
            log::warn!("search thread panicked");
        }
        if let Some(timer) = self.timer_handle {
            let _ = timer.join();
        }
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) {
        self.cancel();
        self.wait();
    }
}

/// Engine controller managing searches for one game.
pub struct EngineController {
    /// Search state reused across the game's searches
    context: Arc<Mutex<SearchContext>>,
    /// Active search job (if any)
    current_job: Option<SearchJob>,
    /// Optional callback for per-iteration search info
    reporter: Option<SearchReporter>,
    sink: BestMoveSink,
}

impl EngineController {
    /// Create a controller that hands every search's best move to `sink`.
    #[must_use]
    pub fn new(params: SearchParams, sink: BestMoveSink) -> Self {
        EngineController {
            context: Arc::new(Mutex::new(SearchContext::new(params))),
            current_job: None,
            reporter: None,
            sink,
        }
    }

    /// Set callback for iteration info reporting.
    pub fn set_reporter(&mut self, reporter: Option<SearchReporter>) {
        self.reporter = reporter;
    }

    /// Get a reference to the search context. Locking it blocks while a search runs.
    #[must_use]
    pub fn context(&self) -> &Arc<Mutex<SearchContext>> {
        &self.context
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.stop_search();
        self.context.lock().set_params(params);
    }

    /// Stop any search and forget everything learned during the game.
    pub fn new_game(&mut self) {
        self.stop_search();
        self.context.lock().clear();
    }

    /// Check if there's a search still running
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Progress of the current or most recent search.
    #[must_use]
    pub fn shared(&self) -> Option<Arc<SearchShared>> {
        self.current_job.as_ref().map(|job| Arc::clone(job.shared()))
    }

    /// Signal stop to the active search (non-blocking). Returns `true` when
    /// this call announced the best move.
    pub fn cancel(&self) -> bool {
        self.current_job.as_ref().is_some_and(SearchJob::cancel)
    }

    /// Stop any active search and wait for its threads.
    pub fn stop_search(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop_and_wait();
        }
    }

    /// Wait for the active search to end on its own.
    ///
    /// Never returns for a search with neither a depth cap it can reach nor a
    /// deadline, unless another thread cancels it.
    pub fn wait(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.wait();
        }
    }

    /// Start searching `position` on a worker thread.
    ///
    /// Any running search is stopped first. With a `deadline`, a timer thread
    /// stops the search when it passes.
    pub fn start_search(
        &mut self,
        position: Position,
        max_depth: u32,
        deadline: Option<Instant>,
    ) -> Result<(), EngineError> {
        self.stop_search();

        let shared = Arc::new(SearchShared::new());
        if let Some(first) = position.generate_moves().first() {
            shared.set_best(BestLine::seed(first));
        }

        let context = Arc::clone(&self.context);
        let reporter = self.reporter.clone();
        let sink = Arc::clone(&self.sink);
        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut guard = context.lock();
                guard.attach(Arc::clone(&worker_shared));
                guard.search(&position, max_depth, reporter.as_ref());
                drop(guard);
                if finish(&worker_shared, &sink) {
                    log::debug!("search completed");
                }
            })
            .map_err(|source| EngineError::Spawn {
                thread: "search",
                source,
            })?;

        let timer_handle = match deadline {
            Some(deadline) => {
                let timer =
                    Self::spawn_timer(deadline, Arc::clone(&shared), Arc::clone(&self.sink));
                match timer {
                    Ok(timer) => Some(timer),
                    Err(source) => {
                        shared.claim_stop();
                        let _ = handle.join();
                        return Err(EngineError::Spawn {
                            thread: "timer",
                            source,
                        });
                    }
                }
            }
            None => None,
        };

        log::debug!("search spawned: depth cap {max_depth}, deadline {deadline:?}");
        self.current_job = Some(SearchJob {
            shared,
            sink: Arc::clone(&self.sink),
            handle,
            timer_handle,
        });
        Ok(())
    }

    fn spawn_timer(
        deadline: Instant,
        shared: Arc<SearchShared>,
        sink: BestMoveSink,
    ) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("search-timer".to_string())
            .spawn(move || loop {
                if shared.is_stopped() {
                    break;
                }
                let now = Instant::now();
                if now >= deadline {
                    if finish(&shared, &sink) {
                        log::info!("search stopped at deadline");
                    }
                    break;
                }
                thread::sleep((deadline - now).min(Duration::from_millis(MAX_POLL_SLEEP_MS)));
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_sink() -> (BestMoveSink, Arc<Mutex<Vec<Option<Move>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let sink: BestMoveSink = Arc::new(move |mv| log.lock().push(mv));
        (sink, seen)
    }

    #[test]
    fn depth_limited_search_announces_once() {
        let (sink, seen) = recording_sink();
        let mut controller = EngineController::new(SearchParams::default(), sink);
        controller
            .start_search(Position::new(), 3, None)
            .expect("spawn");
        controller.wait();
        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        let mv = seen[0].expect("a move");
        assert!(Position::new().generate_moves().iter().any(|m| *m == mv));
    }

    #[test]
    fn cancel_announces_exactly_once() {
        let (sink, seen) = recording_sink();
        let mut controller = EngineController::new(SearchParams::default(), sink);
        controller
            .start_search(Position::new(), 50, None)
            .expect("spawn");
        thread::sleep(Duration::from_millis(20));
        assert!(controller.is_searching());
        let shared = controller.shared().expect("running job");
        assert!(!shared.is_stopped());

        assert!(controller.cancel());
        assert!(!controller.cancel());
        assert!(shared.is_stopped());
        controller.stop_search();
        assert!(!controller.is_searching());
        assert!(controller.shared().is_none());

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_some());
    }

    #[test]
    fn set_params_applies_to_the_next_search() {
        let (sink, seen) = recording_sink();
        let mut controller = EngineController::new(SearchParams::default(), sink);
        controller
            .start_search(Position::new(), 50, None)
            .expect("spawn");
        let params = SearchParams {
            null_min_depth: 5,
            ..SearchParams::default()
        };
        controller.set_params(params.clone());
        assert!(!controller.is_searching());
        assert_eq!(seen.lock().len(), 1);
        assert_eq!(controller.context().lock().params(), &params);
    }

    #[test]
    fn deadline_stops_the_search() {
        let (sink, seen) = recording_sink();
        let mut controller = EngineController::new(SearchParams::default(), sink);
        let deadline = Instant::now() + Duration::from_millis(50);
        controller
            .start_search(Position::new(), 50, Some(deadline))
            .expect("spawn");
        controller.wait();
        assert!(Instant::now() >= deadline);
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn new_game_clears_remembered_replies() {
        let (sink, _seen) = recording_sink();
        let mut controller = EngineController::new(SearchParams::default(), sink);
        controller
            .start_search(Position::new(), 3, None)
            .expect("spawn");
        controller.wait();
        assert!(controller.context().lock().remembered() > 0);
        controller.new_game();
        assert_eq!(controller.context().lock().remembered(), 0);
    }
}
