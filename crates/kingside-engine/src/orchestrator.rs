//! Runs one search per turn on a dedicated worker thread.
//!
//! The worker owns a snapshot of the game, so nothing it does can reach the
//! caller's live state. A panic inside the strategy is caught at the thread
//! boundary and reported as [`SearchError::StrategyFault`]; the worker always
//! publishes exactly one result before it exits.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use kingside_core::GameState;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::eval::{Evaluator, MaterialPst};
use crate::search::control::SearchControl;
use crate::search::{SearchResult, Searcher, Strategy};

/// Spawns search workers that share one evaluator.
#[derive(Clone)]
pub struct Orchestrator {
    evaluator: Arc<dyn Evaluator>,
}

impl Orchestrator {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator }
    }

    /// Start searching `snapshot` on a new thread and return at once.
    pub fn spawn(&self, snapshot: GameState, depth: u8, strategy: Strategy) -> Result<SearchHandle, SearchError> {
        let (tx, rx) = mpsc::sync_channel(1);
        let control = SearchControl::new();
        let searcher = Searcher::new(Arc::clone(&self.evaluator)).with_control(control.clone());
        let side = snapshot.turn();

        debug!(%side, depth, %strategy, ply = snapshot.ply(), "spawning search worker");
        let worker = thread::Builder::new()
            .name(format!("search-{}", side.to_string().to_lowercase()))
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| searcher.search(&snapshot, depth, strategy)))
                    .unwrap_or_else(|payload| {
                        Err(SearchError::StrategyFault {
                            message: panic_message(payload.as_ref()),
                        })
                    });
                if let Err(err) = &result {
                    warn!(error = %err, "search worker finished without a move");
                }
                // The handle may already be gone; nobody is left to tell.
                let _ = tx.send(result);
            })
            .map_err(SearchError::Spawn)?;

        Ok(SearchHandle {
            receiver: rx,
            control,
            worker: Some(worker),
            delivered: false,
        })
    }

    /// Spawn a search and block until it reports.
    pub fn run(&self, snapshot: GameState, depth: u8, strategy: Strategy) -> Result<SearchResult, SearchError> {
        self.spawn(snapshot, depth, strategy)?.wait()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Orchestrator::new(Arc::new(MaterialPst))
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish_non_exhaustive()
    }
}

/// A search running on its worker thread.
///
/// Dropping the handle raises the stop flag so an abandoned worker winds
/// down at its next node.
#[derive(Debug)]
pub struct SearchHandle {
    receiver: Receiver<Result<SearchResult, SearchError>>,
    control: SearchControl,
    worker: Option<JoinHandle<()>>,
    delivered: bool,
}

impl SearchHandle {
    /// Block until the worker publishes its result.
    pub fn wait(mut self) -> Result<SearchResult, SearchError> {
        let result = self.receiver.recv().unwrap_or_else(|_| Err(worker_vanished()));
        self.delivered = true;
        self.join();
        result
    }

    /// The result if the worker has finished, without blocking.
    ///
    /// The result is handed out once; after that this returns `None`.
    pub fn try_result(&mut self) -> Option<Result<SearchResult, SearchError>> {
        if self.delivered {
            return None;
        }
        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(worker_vanished()),
        };
        self.delivered = true;
        self.join();
        Some(result)
    }

    /// Ask the worker to stop. It then reports [`SearchError::Cancelled`]
    /// unless it had already finished.
    pub fn cancel(&self) {
        self.control.stop();
    }

    /// `true` once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(JoinHandle::is_finished)
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            warn!("search worker panicked after publishing its result");
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if !self.delivered {
            self.cancel();
        }
    }
}

fn worker_vanished() -> SearchError {
    SearchError::StrategyFault {
        message: "search worker exited without a result".to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "search panicked".to_string()
    }
}
