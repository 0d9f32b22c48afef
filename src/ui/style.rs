//! Colors and modifiers for the editor chrome.
//!
//! Document text is drawn unstyled so it keeps the terminal's own colors.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastLevel;

/// Inverted bar showing the file name and cursor position.
pub fn status_bar_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Bottom row listing the command shortcuts.
pub fn shortcut_bar_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::DIM)
}

/// Prefix and colors for a toast of the given level.
pub fn toast_style(level: ToastLevel) -> (&'static str, Style) {
    match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    }
}

/// Border of the prompt popup.
pub fn prompt_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}
