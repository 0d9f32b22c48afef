use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::ui::{SHORTCUTS, style};

/// Status line text: file name, modified marker and cursor position.
pub fn status_text(model: &Model) -> String {
    let modified = if model.is_modified() { "*" } else { "" };
    let cursor = model.buffer.cursor();
    format!(
        " {}{} | Line {}/{} Col {}",
        model.display_name(),
        modified,
        cursor.row + 1,
        model.buffer.line_count(),
        cursor.col + 1
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model)).style(style::status_bar_style());
    frame.render_widget(status_bar, area);
}

pub fn render_shortcut_bar(frame: &mut Frame, area: Rect) {
    let shortcuts = Paragraph::new(format!(" {SHORTCUTS}")).style(style::shortcut_bar_style());
    frame.render_widget(shortcuts, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = style::toast_style(level);
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
