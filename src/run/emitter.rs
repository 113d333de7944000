use crate::app::event::{AppEvent, Generation};
use crate::sort::{Abandoned, Step, StepEmitter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Forwards steps into the application event channel and sleeps between them.
///
/// The emitter is bound to the generation it was created for. Once the shared
/// generation moves on (reset or a newer run), every call reports
/// [`Abandoned`] and nothing further reaches the channel.
pub struct PacedEmitter {
    generation: Generation,
    current: Arc<AtomicU64>,
    delay_ms: Arc<AtomicU64>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl PacedEmitter {
    pub fn new(
        generation: Generation,
        current: Arc<AtomicU64>,
        delay_ms: Arc<AtomicU64>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            generation,
            current,
            delay_ms,
            event_tx,
        }
    }

    fn ensure_current(&self) -> Result<(), Abandoned> {
        if self.current.load(Ordering::Acquire) == self.generation {
            Ok(())
        } else {
            Err(Abandoned)
        }
    }
}

impl StepEmitter<i64> for PacedEmitter {
    fn emit(&mut self, step: Step<i64>, values: &[i64]) -> Result<(), Abandoned> {
        self.ensure_current()?;
        self.event_tx
            .send(AppEvent::Step {
                generation: self.generation,
                step,
                values: values.to_vec(),
            })
            // receiver gone means the app is shutting down
            .map_err(|_| Abandoned)
    }

    async fn pause(&mut self) -> Result<(), Abandoned> {
        self.ensure_current()?;
        // read on every pause so delay changes apply to the next step
        let delay = self.delay_ms.load(Ordering::Relaxed);
        if delay == 0 {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_current()
    }
}
