use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub algorithm_bar: Rect,
    pub chart: Rect,
    pub input_box: Rect,
    pub controls: Rect,
    pub stats: Rect,
    pub messages: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: chart column | gap | side panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(30),    // Chart column
            Constraint::Length(34), // Side panel
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Left: algorithm picker | bars | custom array input
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Algorithm picker
            Constraint::Min(5),    // Bars
            Constraint::Length(3), // Input box
        ])
        .split(left_panel);

    // Right: key bindings | run stats | messages
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Controls
            Constraint::Length(9),  // Stats
            Constraint::Min(3),     // Messages
        ])
        .split(right_panel);

    AppLayout {
        algorithm_bar: left_chunks[0],
        chart: left_chunks[1],
        input_box: left_chunks[2],
        controls: right_chunks[0],
        stats: right_chunks[1],
        messages: right_chunks[2],
        status_bar,
    }
}
