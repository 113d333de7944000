mod bars;
mod controls;
mod input_box;
mod layout;
mod message_area;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::sort::Algorithm;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_algorithm_bar(frame, app_layout.algorithm_bar, state);
    bars::render(frame, app_layout.chart, state);
    input_box::render(frame, app_layout.input_box, state);
    controls::render(frame, app_layout.controls);
    render_stats(frame, app_layout.stats, state);
    message_area::render(frame, app_layout.messages, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_algorithm_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        let style = if state.selected == Some(*algorithm) {
            Theme::algorithm_selected()
        } else {
            Theme::algorithm_normal()
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, algorithm.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Stats ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {:<9}", label), Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(value, Style::default().fg(Theme::TEXT_PRIMARY)),
        ])
    };
    let elapsed = state
        .elapsed()
        .map(|e| format!("{:.1}s", e.as_secs_f64()))
        .unwrap_or_else(|| "-".to_string());
    let range = match (state.array.min(), state.array.max()) {
        (Some(min), Some(max)) => format!("{}..{}", min, max),
        _ => "-".to_string(),
    };

    let lines = vec![
        row("compares", state.stats.compares.to_string()),
        row("swaps", state.stats.swaps.to_string()),
        row("writes", state.stats.assigns.to_string()),
        row("total", state.stats.steps().to_string()),
        row("values", range),
        row("delay", format!("{}ms", state.delay_ms)),
        row("elapsed", elapsed),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
