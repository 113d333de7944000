use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::sort::Algorithm;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Step {
            generation,
            step,
            values,
        } => {
            if !state.apply_step(generation, step, values) {
                debug!(generation, "dropped step from stale run");
            }
            vec![]
        }
        AppEvent::RunFinished { generation, values } => {
            if state.complete_run(generation, values) {
                info!(generation, compares = state.stats.compares, "run finished");
            } else {
                debug!(generation, "dropped completion of stale run");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

/// Handle up to `limit` events that are already queued, without waiting.
pub fn handle_queued(
    state: &mut AppState,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    limit: usize,
) -> Vec<Action> {
    let mut actions = Vec::new();
    for _ in 0..limit {
        let Ok(event) = event_rx.try_recv() else {
            break;
        };
        actions.extend(handle_event(state, event));
    }
    actions
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    // elapsed time in the status bar
    if state.is_running() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.mode {
        InputMode::CustomArray => handle_input_key(state, key),
        InputMode::Normal => handle_normal_key(state, key),
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => vec![Action::StartRun],
        KeyCode::Char('r') => vec![Action::ResetArray],
        KeyCode::Char('w') => vec![Action::SaveConfig],
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(algorithm) = Algorithm::from_key(c) {
                select_algorithm(state, algorithm);
            }
            vec![]
        }
        KeyCode::Char('+') | KeyCode::Char('=') => change_delay(state, 10),
        KeyCode::Char('-') => change_delay(state, -10),
        KeyCode::Char('>') => change_delay(state, 100),
        KeyCode::Char('<') => change_delay(state, -100),
        KeyCode::Char(']') => change_size(state, 1),
        KeyCode::Char('[') => change_size(state, -1),
        KeyCode::Char('}') => change_size(state, 10),
        KeyCode::Char('{') => change_size(state, -10),
        KeyCode::Char('c') => {
            if state.is_running() {
                state.error_message("Cannot change the array while a sort is running".to_string());
            } else {
                state.mode = InputMode::CustomArray;
                state.input.clear();
            }
            vec![]
        }
        _ => vec![],
    }
}

fn select_algorithm(state: &mut AppState, algorithm: Algorithm) {
    if state.selected == Some(algorithm) {
        return;
    }
    state.select_algorithm(algorithm);
    if state.is_running() {
        state.system_message(format!(
            "{} selected; it will be used for the next run",
            algorithm.title()
        ));
    } else {
        state.system_message(format!("{} selected, press Enter to start", algorithm.title()));
    }
}

fn change_delay(state: &mut AppState, delta: i64) -> Vec<Action> {
    let delay_ms = state.adjust_delay(delta);
    vec![Action::SetDelay { delay_ms }]
}

fn change_size(state: &mut AppState, delta: i64) -> Vec<Action> {
    if state.is_running() {
        debug!("resize rejected while running");
        state.error_message("Cannot resize the array while a sort is running".to_string());
        return vec![];
    }
    let size = state.resize_array(delta);
    debug!(size, "array resized");
    vec![]
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let text = state.input.submit();
            state.mode = InputMode::Normal;
            apply_custom_array(state, &text);
        }
        KeyCode::Esc => {
            state.input.clear();
            state.mode = InputMode::Normal;
        }
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.home(),
        KeyCode::End => state.input.end(),
        KeyCode::Up => state.input.history_up(),
        KeyCode::Down => state.input.history_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.home(),
                    'e' => state.input.end(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn apply_custom_array(state: &mut AppState, text: &str) {
    if state.is_running() {
        state.error_message("Cannot change the array while a sort is running".to_string());
        return;
    }
    match state.set_custom_array(text) {
        Ok(()) => {
            info!(size = state.array.len(), "custom array applied");
            state.system_message(format!("Custom array set ({} values)", state.array.len()));
        }
        Err(e) => {
            warn!(input = text, "custom array rejected");
            state.error_message(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::sort::array::ArrayState;
    use crate::sort::{BarState, Step};

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(state, AppEvent::Terminal(event))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn new_state() -> AppState {
        let mut config = AppConfig::default();
        config.visualizer.array_size = 8;
        AppState::new(config)
    }

    #[test]
    fn test_global_quit() {
        let mut state = new_state();
        let event = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(event)),
            vec![Action::Quit]
        );
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }

    #[test]
    fn test_digit_selects_algorithm() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.selected, Some(Algorithm::Merge));
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.selected, Some(Algorithm::Insertion));
    }

    #[test]
    fn test_start_and_reset_keys() {
        let mut state = new_state();
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::StartRun]);
        assert_eq!(press(&mut state, KeyCode::Char(' ')), vec![Action::StartRun]);
        assert_eq!(press(&mut state, KeyCode::Char('r')), vec![Action::ResetArray]);
        assert_eq!(press(&mut state, KeyCode::Char('w')), vec![Action::SaveConfig]);
    }

    #[test]
    fn test_delay_keys_emit_new_delay() {
        let mut state = new_state();
        state.delay_ms = 200;
        assert_eq!(
            press(&mut state, KeyCode::Char('+')),
            vec![Action::SetDelay { delay_ms: 210 }]
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('<')),
            vec![Action::SetDelay { delay_ms: 110 }]
        );
    }

    #[test]
    fn test_resize_rejected_while_running() {
        let mut state = new_state();
        state.begin_run(RunSession::new(1, Algorithm::Bubble));
        let before = state.array.values().to_vec();
        press(&mut state, KeyCode::Char(']'));
        assert_eq!(state.array_size, 8);
        assert_eq!(state.array.values(), before.as_slice());
        assert_eq!(
            state.messages.last().map(|m| m.kind.clone()),
            Some(MessageKind::Error)
        );
    }

    #[test]
    fn test_resize_regenerates_when_idle() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('}'));
        assert_eq!(state.array_size, 18);
        assert_eq!(state.array.len(), 18);
        assert_eq!(state.bar_states.len(), 18);
    }

    #[test]
    fn test_custom_array_input_flow() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('c'));
        assert_eq!(state.mode, InputMode::CustomArray);
        // keys are text while editing
        type_text(&mut state, "10, abc, 5,, 3q");
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.array.values(), &[10, 5, 3]);
    }

    #[test]
    fn test_invalid_custom_array_reports_error() {
        let mut state = new_state();
        state.array = ArrayState::from_values(vec![7, 8]);
        press(&mut state, KeyCode::Char('c'));
        type_text(&mut state, "abc, , ");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.array.values(), &[7, 8]);
        let last = state.messages.last().unwrap();
        assert_eq!(last.kind, MessageKind::Error);
        assert!(last.text.contains("valid array"));
    }

    #[test]
    fn test_escape_cancels_custom_input() {
        let mut state = new_state();
        let before = state.array.values().to_vec();
        press(&mut state, KeyCode::Char('c'));
        type_text(&mut state, "1,2");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.array.values(), before.as_slice());
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn test_custom_input_refused_while_running() {
        let mut state = new_state();
        state.begin_run(RunSession::new(1, Algorithm::Quick));
        press(&mut state, KeyCode::Char('c'));
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_stale_events_are_dropped() {
        let mut state = new_state();
        state.array = ArrayState::from_values(vec![2, 1]);
        state.reset_bar_states();
        state.begin_run(RunSession::new(5, Algorithm::Bubble));

        handle_event(
            &mut state,
            AppEvent::Step {
                generation: 4,
                step: Step::Sorted,
                values: vec![1, 2],
            },
        );
        handle_event(
            &mut state,
            AppEvent::RunFinished {
                generation: 4,
                values: vec![1, 2],
            },
        );
        assert!(state.is_running());
        assert_eq!(state.array.values(), &[2, 1]);

        handle_event(
            &mut state,
            AppEvent::Step {
                generation: 5,
                step: Step::Sorted,
                values: vec![1, 2],
            },
        );
        assert_eq!(state.bar_states, vec![BarState::Sorted; 2]);
        handle_event(
            &mut state,
            AppEvent::RunFinished {
                generation: 5,
                values: vec![1, 2],
            },
        );
        assert!(!state.is_running());
    }

    #[test]
    fn test_tick_marks_dirty_only_while_running() {
        let mut state = new_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
        state.begin_run(RunSession::new(1, Algorithm::Merge));
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_handle_queued_stops_at_limit() {
        let mut state = new_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        for _ in 0..300 {
            tx.send(AppEvent::Tick).unwrap();
        }
        let quit = CEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        tx.send(AppEvent::Terminal(quit)).unwrap();

        assert!(handle_queued(&mut state, &mut rx, 256).is_empty());
        assert_eq!(state.tick_count, 256);
        // the quit key is still waiting for the next frame
        assert_eq!(handle_queued(&mut state, &mut rx, 256), vec![Action::Quit]);
        assert_eq!(state.tick_count, 300);
        assert!(handle_queued(&mut state, &mut rx, 256).is_empty());
    }
}
