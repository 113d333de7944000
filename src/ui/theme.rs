use crate::sort::BarState;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_ROSE: Color = Color::Rgb(225, 95, 120);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 125);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 90);
    pub const BG_ELEVATED: Color = Color::Rgb(30, 33, 42);
    pub const BAR_NORMAL: Color = Color::Rgb(100, 170, 230);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn system_message() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn algorithm_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn algorithm_normal() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    /// Fill colour of a bar in the given visual state.
    pub fn bar(state: BarState) -> Style {
        let color = match state {
            BarState::Normal => Self::BAR_NORMAL,
            BarState::Highlight => Self::ACCENT_AMBER,
            BarState::Swap => Self::ACCENT_ROSE,
            BarState::Sorted => Self::ACCENT_GREEN,
        };
        Style::default().fg(color)
    }
}
