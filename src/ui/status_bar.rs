use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let (label, color) = if state.is_running() {
        (" RUNNING ", Theme::ACCENT_AMBER)
    } else {
        (" READY ", Theme::ACCENT_GREEN)
    };
    parts.push(Span::styled(
        label,
        Style::default()
            .fg(Theme::BG_ELEVATED)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let clock = match state.elapsed() {
        Some(elapsed) => format!(" {:.1}s ", elapsed.as_secs_f64()),
        None => String::new(),
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        clock,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
