use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.mode == InputMode::CustomArray;
    let (border_style, border_type) = if editing {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Custom array ")
        .title_style(if editing {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if editing {
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(state.input.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        let before_cursor = &state.input.text[..state.input.cursor];
        let cursor_x = cursor_column(inner, PROMPT.width() + before_cursor.width());
        frame.set_cursor_position((cursor_x, inner.y));
    } else {
        let hint = "press c, then type values like 5, 3, 8, 1 and Enter";
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Theme::TEXT_MUTED)),
            inner,
        );
    }
}

/// Screen column for a cursor `offset` cells into `inner`, kept inside it.
fn cursor_column(inner: Rect, offset: usize) -> u16 {
    let offset = offset.min(u16::MAX as usize) as u16;
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_stays_inside_box() {
        let inner = Rect::new(2, 1, 20, 1);
        assert_eq!(cursor_column(inner, 0), 2);
        assert_eq!(cursor_column(inner, 5), 7);
        assert_eq!(cursor_column(inner, 19), 21);
        assert_eq!(cursor_column(inner, 500), 21);
        assert_eq!(cursor_column(inner, 200_000), 21);
    }

    #[test]
    fn test_cursor_column_near_screen_edge() {
        let inner = Rect::new(u16::MAX - 10, 0, 10, 1);
        assert_eq!(cursor_column(inner, 70_000), u16::MAX - 1);
    }
}
