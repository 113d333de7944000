use crate::sort::Step;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one run; bumped on every start and reset.
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One engine step, with the array as it stands after the step
    Step {
        generation: Generation,
        step: Step<i64>,
        values: Vec<i64>,
    },

    /// The engine returned; `values` is the sorted array
    RunFinished {
        generation: Generation,
        values: Vec<i64>,
    },

    /// Tick for UI refresh
    Tick,
}
