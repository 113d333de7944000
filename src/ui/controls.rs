//! Key reference panel.

use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const KEYS: [(&str, &str); 10] = [
    ("1-5", "choose algorithm"),
    ("Enter", "start sorting"),
    ("r", "new random array"),
    ("+ -", "delay ±10ms"),
    ("> <", "delay ±100ms"),
    ("] [", "size ±1"),
    ("} {", "size ±10"),
    ("c", "custom array"),
    ("w", "save settings"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Keys ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<6}", key), Theme::key_hint()),
                Span::styled(*what, Style::default().fg(Theme::TEXT_SECONDARY)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
