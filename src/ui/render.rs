use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::editor::render_frame;
use crate::ui::{overlays, status};

/// Split the screen into editor, toast, status and shortcut rows.
///
/// The toast row only takes space while a toast is showing.
pub fn split_screen(area: Rect, toast_visible: bool) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(u16::from(toast_visible)),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render the whole UI.
///
/// The viewport is resized to the editor area and made to follow the cursor
/// on every call, so the cursor is always inside the drawn rows.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let toast_visible = model.active_toast().is_some();
    let [editor_area, toast_area, status_area, shortcut_area] = split_screen(area, toast_visible);

    model.viewport.resize(editor_area.height);
    model.viewport.follow(model.buffer.cursor().row);
    let projection = render_frame(
        &model.buffer,
        model.viewport.top_row(),
        usize::from(editor_area.width),
        usize::from(editor_area.height),
    );

    let lines: Vec<Line> = projection
        .rows
        .iter()
        .map(|row| Line::raw(display_text(row)))
        .collect();
    frame.render_widget(Paragraph::new(lines), editor_area);

    if toast_visible {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);
    status::render_shortcut_bar(frame, shortcut_area);

    if let Some(prompt) = &model.prompt {
        overlays::render_prompt_overlay(prompt, frame, area);
    } else if editor_area.width > 0 && editor_area.height > 0 {
        let (row, col) = projection.cursor;
        let line = model.buffer.line_at(model.buffer.cursor().row).unwrap_or("");
        let x = u16::try_from(cell_column(line, col))
            .unwrap_or(u16::MAX)
            .min(editor_area.width - 1);
        let y = u16::try_from(row).unwrap_or(u16::MAX).min(editor_area.height - 1);
        frame.set_cursor_position(Position::new(editor_area.x + x, editor_area.y + y));
    }
}

/// Replace control characters (tabs included) with spaces.
fn display_text(row: &str) -> String {
    row.chars().map(display_char).collect()
}

fn display_char(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

/// Screen cells taken by the first `col` characters of `line` as drawn.
fn cell_column(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(display_char)
        .collect::<String>()
        .width()
}
