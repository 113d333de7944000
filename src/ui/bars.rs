//! The bar chart: one bar per array element, coloured by its visual state.

use crate::app::state::AppState;
use crate::sort::BarState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match &state.run {
        Some(run) => format!(" {} ", run.algorithm.title()),
        None => " Array ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if state.is_running() {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    if state.array.is_empty() {
        let empty = Paragraph::new("Array is empty. Press r for a random array.")
            .style(Style::default().fg(Theme::TEXT_MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let values = state.array.values();
    let inner_width = block.inner(area).width;
    let (bar_width, bar_gap) = fit_bars(inner_width, values.len());
    let floor = baseline(state.array.min().unwrap_or(0));
    let show_values = state.config.ui.show_values && bar_width >= widest_label(values);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let bar_state = state.bar_states.get(i).copied().unwrap_or(BarState::Normal);
            let bar = Bar::default()
                .value(bar_height(v, floor))
                .style(Theme::bar(bar_state))
                .text_value(String::new());
            if show_values {
                bar.label(Line::from(v.to_string()))
            } else {
                bar
            }
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap);
    frame.render_widget(chart, area);
}

/// Bar width and gap that fit `count` bars into `width` columns.
///
/// A one-column gap is kept while bars can stay at least two columns wide.
fn fit_bars(width: u16, count: usize) -> (u16, u16) {
    let width = width as usize;
    let count = count.max(1);
    let with_gap = (width + 1) / count;
    if with_gap >= 3 {
        return ((with_gap - 1) as u16, 1);
    }
    ((width / count).max(1) as u16, 0)
}

/// Value drawn as an empty bar. Negative arrays are shifted so that the
/// smallest value still shows one unit.
fn baseline(min: i64) -> i64 {
    if min < 0 {
        min - 1
    } else {
        0
    }
}

fn bar_height(value: i64, floor: i64) -> u64 {
    value.saturating_sub(floor).max(0) as u64
}

fn widest_label(values: &[i64]) -> u16 {
    values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0) as u16
}
