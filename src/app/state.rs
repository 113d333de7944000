use crate::app::event::Generation;
use crate::config::model::{AppConfig, MAX_ARRAY_SIZE, MAX_DELAY_MS, MIN_ARRAY_SIZE};
use crate::sort::array::{self, ArrayState, ParseArrayError};
use crate::sort::{Algorithm, BarState, Step};
use chrono::Local;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Message {
    pub timestamp: String,
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    System,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    CustomArray,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the current line, remembering it in history.
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.trim().is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(0) => 0,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                self.text = self.history[i + 1].clone();
                self.cursor = self.text.len();
            }
            Some(_) => self.clear(),
            None => {}
        }
    }
}

/// The run currently in flight.
#[derive(Debug, Clone)]
pub struct RunSession {
    pub generation: Generation,
    pub algorithm: Algorithm,
    pub started_at: Instant,
}

impl RunSession {
    pub fn new(generation: Generation, algorithm: Algorithm) -> Self {
        Self {
            generation,
            algorithm,
            started_at: Instant::now(),
        }
    }
}

/// Step counts of the current or most recent run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub compares: usize,
    pub swaps: usize,
    pub assigns: usize,
    /// Set once the run completes.
    pub elapsed: Option<Duration>,
}

impl RunStats {
    pub fn steps(&self) -> usize {
        self.compares + self.swaps + self.assigns
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub array: ArrayState,
    pub bar_states: Vec<BarState>,
    pub selected: Option<Algorithm>,
    pub run: Option<RunSession>,
    pub stats: RunStats,
    pub delay_ms: u64,
    pub array_size: usize,
    pub messages: Vec<Message>,
    pub input: InputState,
    pub mode: InputMode,
    pub dirty: bool,
    pub should_quit: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let array = ArrayState::random(
            config.visualizer.array_size,
            config.visualizer.value_range(),
        );
        let bar_states = vec![BarState::Normal; array.len()];
        Self {
            selected: config.visualizer.algorithm,
            delay_ms: config.visualizer.delay_ms,
            array_size: config.visualizer.array_size,
            config,
            array,
            bar_states,
            run: None,
            stats: RunStats::default(),
            messages: Vec::new(),
            input: InputState::new(),
            mode: InputMode::Normal,
            dirty: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.run.as_ref().map(|r| r.generation) == Some(generation)
    }

    pub fn reset_bar_states(&mut self) {
        self.bar_states = vec![BarState::Normal; self.array.len()];
        self.dirty = true;
    }

    /// Replace the array with a fresh random one of the configured size.
    pub fn regenerate_array(&mut self) {
        self.array = ArrayState::random(self.array_size, self.config.visualizer.value_range());
        self.stats = RunStats::default();
        self.reset_bar_states();
    }

    pub fn begin_run(&mut self, session: RunSession) {
        self.system_message(format!(
            "{} started on {} values",
            session.algorithm.title(),
            self.array.len()
        ));
        self.run = Some(session);
        self.stats = RunStats::default();
        self.reset_bar_states();
    }

    pub fn end_run(&mut self) {
        self.run = None;
        self.dirty = true;
    }

    /// Apply a step of the active run. Steps from any other run are ignored.
    pub fn apply_step(&mut self, generation: Generation, step: Step<i64>, values: Vec<i64>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.array.replace(values);
        if self.bar_states.len() != self.array.len() {
            self.bar_states = vec![BarState::Normal; self.array.len()];
        }
        for state in self.bar_states.iter_mut() {
            if matches!(state, BarState::Highlight | BarState::Swap) {
                *state = BarState::Normal;
            }
        }
        match step {
            Step::Compare(i, j) => {
                self.stats.compares += 1;
                self.set_bar(i, BarState::Highlight);
                self.set_bar(j, BarState::Highlight);
            }
            Step::Swap(i, j) => {
                self.stats.swaps += 1;
                self.set_bar(i, BarState::Swap);
                self.set_bar(j, BarState::Swap);
            }
            Step::Assign(i, _) => {
                self.stats.assigns += 1;
                self.set_bar(i, BarState::Swap);
            }
            Step::Sorted => self.bar_states.fill(BarState::Sorted),
        }
        self.dirty = true;
        true
    }

    fn set_bar(&mut self, index: usize, state: BarState) {
        if let Some(bar) = self.bar_states.get_mut(index) {
            *bar = state;
        }
    }

    /// Hand-off of the final array; releases the run lock.
    pub fn complete_run(&mut self, generation: Generation, values: Vec<i64>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let Some(session) = self.run.take() else {
            return false;
        };
        self.array.replace(values);
        self.bar_states = vec![BarState::Sorted; self.array.len()];
        let elapsed = session.started_at.elapsed();
        self.stats.elapsed = Some(elapsed);
        self.system_message(format!(
            "{} finished in {:.1}s: {} compares, {} swaps, {} writes",
            session.algorithm.title(),
            elapsed.as_secs_f64(),
            self.stats.compares,
            self.stats.swaps,
            self.stats.assigns
        ));
        true
    }

    /// Parse and install a custom array. On error the array is left as is.
    pub fn set_custom_array(&mut self, input: &str) -> Result<(), ParseArrayError> {
        let values = array::parse_custom_array(input)?;
        self.array = ArrayState::from_values(values);
        self.stats = RunStats::default();
        self.reset_bar_states();
        Ok(())
    }

    /// Change the array size and regenerate. Returns the new size.
    pub fn resize_array(&mut self, delta: i64) -> usize {
        let size = (self.array_size as i64 + delta)
            .clamp(MIN_ARRAY_SIZE as i64, MAX_ARRAY_SIZE as i64) as usize;
        self.array_size = size;
        self.regenerate_array();
        size
    }

    /// Change the delay by `delta` milliseconds. Returns the new delay.
    pub fn adjust_delay(&mut self, delta: i64) -> u64 {
        let delay = (self.delay_ms as i64 + delta).clamp(0, MAX_DELAY_MS as i64) as u64;
        self.delay_ms = delay;
        self.dirty = true;
        delay
    }

    /// Copy the live settings back into the config for saving.
    pub fn sync_config(&mut self) {
        self.config.visualizer.delay_ms = self.delay_ms;
        self.config.visualizer.array_size = self.array_size;
        self.config.visualizer.algorithm = self.selected;
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.selected = Some(algorithm);
        self.dirty = true;
    }

    pub fn add_message(&mut self, msg: Message) {
        self.messages.push(msg);
        if self.messages.len() > self.config.ui.max_messages {
            self.messages.remove(0);
        }
        self.dirty = true;
    }

    pub fn system_message(&mut self, text: String) {
        let msg = Message {
            timestamp: Local::now().format(&self.config.ui.timestamp_format).to_string(),
            text,
            kind: MessageKind::System,
        };
        self.add_message(msg);
    }

    pub fn error_message(&mut self, text: String) {
        let msg = Message {
            timestamp: Local::now().format(&self.config.ui.timestamp_format).to_string(),
            text,
            kind: MessageKind::Error,
        };
        self.add_message(msg);
    }

    /// Time spent in the current run, or the duration of the last one.
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.run {
            Some(run) => Some(run.started_at.elapsed()),
            None => self.stats.elapsed,
        }
    }

    pub fn status_line(&self) -> String {
        let algorithm = self.selected.map(|a| a.title()).unwrap_or("no algorithm");
        let phase = if self.is_running() {
            "running"
        } else if self.stats.elapsed.is_some() {
            "sorted"
        } else {
            "ready"
        };
        format!(
            "{} | {} | delay {}ms | size {}",
            algorithm,
            phase,
            self.delay_ms,
            self.array.len()
        )
    }
}
