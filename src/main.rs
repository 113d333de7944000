mod app;
mod config;
mod logging;
mod run;
mod sort;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::run::controller::RunController;
use crate::sort::Algorithm;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const MAX_EVENTS_PER_FRAME: usize = 256;

/// Terminal visualizer for classic sorting algorithms.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Algorithm to preselect (bubble, insertion, selection, merge, quick)
    #[arg(long, short)]
    algorithm: Option<Algorithm>,
    /// Pause between steps in milliseconds
    #[arg(long, short)]
    delay: Option<u64>,
    /// Number of random values
    #[arg(long, short)]
    size: Option<usize>,
    /// Start from a custom array, e.g. "5,3,8,1"
    #[arg(long)]
    values: Option<String>,
    /// Enable file logging at this level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = config::load_config()?;
    apply_args(&mut cfg, &args);
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(path = %path.display(), "logging started");
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, args.values).await;

    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Command-line flags win over the config file.
fn apply_args(cfg: &mut config::AppConfig, args: &Args) {
    if let Some(algorithm) = args.algorithm {
        cfg.visualizer.algorithm = Some(algorithm);
    }
    if let Some(delay) = args.delay {
        cfg.visualizer.delay_ms = delay;
    }
    if let Some(size) = args.size {
        cfg.visualizer.array_size = size;
    }
    if let Some(level) = &args.log_level {
        cfg.logging.enabled = true;
        cfg.logging.level = level.clone();
    }
    cfg.normalize();
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    values: Option<String>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let mut controller = RunController::new(event_tx.clone(), state.delay_ms);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    state.system_message("Welcome to sortviz!".to_string());
    match state.selected {
        Some(algorithm) => state.system_message(format!(
            "{} selected, press Enter to start",
            algorithm.title()
        )),
        None => state.system_message("Pick an algorithm with keys 1-5".to_string()),
    }
    if let Some(text) = values {
        if let Err(e) = state.set_custom_array(&text) {
            warn!(input = %text, "custom array from command line rejected");
            state.error_message(e.to_string());
        }
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let mut actions = handler::handle_event(&mut state, event);
        // Fold queued events into one frame, bounded so a frame still goes out
        actions.extend(handler::handle_queued(
            &mut state,
            &mut event_rx,
            MAX_EVENTS_PER_FRAME,
        ));

        for action in actions {
            match action {
                Action::StartRun => {
                    if let Err(e) = controller.start(&mut state) {
                        debug!("start rejected: {}", e);
                        state.error_message(e.to_string());
                    }
                }
                Action::ResetArray => {
                    controller.reset(&mut state);
                    debug!(generation = controller.generation(), "reset");
                    state.system_message(format!(
                        "New random array of {} values",
                        state.array.len()
                    ));
                }
                Action::SetDelay { delay_ms } => controller.set_delay(delay_ms),
                Action::SaveConfig => {
                    state.sync_config();
                    match config::save_config(&state.config) {
                        Ok(path) => {
                            info!(path = %path.display(), "config saved");
                            state.system_message(format!("Settings saved to {}", path.display()));
                        }
                        Err(e) => {
                            warn!("config save failed: {:#}", e);
                            state.error_message(format!("Save failed: {}", e));
                        }
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            controller.abandon();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
