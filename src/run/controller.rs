//! Run lifecycle: start, completion hand-off, and abandonment.
//!
//! At most one run is in flight. The active run is recorded in
//! [`AppState::run`]; the controller owns the pieces that outlive a single
//! event: the shared generation token, the shared delay and the task handle.

use crate::app::event::{AppEvent, Generation};
use crate::app::state::{AppState, RunSession};
use crate::run::emitter::PacedEmitter;
use crate::sort::{self, Algorithm};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("A sort is already running (press r to reset)")]
    AlreadyRunning,
    #[error("Select an algorithm first (keys 1-5)")]
    NoAlgorithm,
}

/// Spawns sorting runs and abandons them on demand.
pub struct RunController {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    generation: Arc<AtomicU64>,
    delay_ms: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl RunController {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, delay_ms: u64) -> Self {
        Self {
            event_tx,
            generation: Arc::new(AtomicU64::new(0)),
            delay_ms: Arc::new(AtomicU64::new(delay_ms)),
            task: None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation.load(Ordering::Acquire)
    }

    /// Takes effect at the next suspension point of the running engine.
    pub fn set_delay(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Relaxed);
    }

    /// Start the selected algorithm on a snapshot of the current array.
    ///
    /// Rejected without side effects while a run is active or when no
    /// algorithm is selected.
    pub fn start(&mut self, state: &mut AppState) -> Result<Generation, StartError> {
        if state.run.is_some() {
            return Err(StartError::AlreadyRunning);
        }
        let algorithm = state.selected.ok_or(StartError::NoAlgorithm)?;

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let values = state.array.values().to_vec();
        info!(
            %algorithm,
            generation,
            size = values.len(),
            delay_ms = self.delay_ms.load(Ordering::Relaxed),
            "run started"
        );

        state.begin_run(RunSession::new(generation, algorithm));
        self.task = Some(self.spawn_run(generation, algorithm, values));
        Ok(generation)
    }

    fn spawn_run(
        &self,
        generation: Generation,
        algorithm: Algorithm,
        mut values: Vec<i64>,
    ) -> JoinHandle<()> {
        let mut emitter = PacedEmitter::new(
            generation,
            self.generation.clone(),
            self.delay_ms.clone(),
            self.event_tx.clone(),
        );
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            match sort::run_algorithm(algorithm, &mut values, &mut emitter).await {
                Ok(()) => {
                    let _ = event_tx.send(AppEvent::RunFinished { generation, values });
                }
                Err(e) => debug!(generation, %algorithm, "{}", e),
            }
        })
    }

    /// Stop any in-flight run. Steps it already queued are dropped by the
    /// state because their generation is no longer current.
    pub fn abandon(&mut self) {
        let previous = self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = previous, "run task aborted");
        }
    }

    /// Abandon any run and replace the array with a fresh random one.
    pub fn reset(&mut self, state: &mut AppState) {
        self.abandon();
        state.end_run();
        state.regenerate_array();
        info!(size = state.array.len(), "array reset");
    }
}
