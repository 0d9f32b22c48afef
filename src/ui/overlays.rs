use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Prompt;
use crate::ui::style;

/// Screen area of the prompt popup: one input row inside a border.
pub fn prompt_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).clamp(30, 72);
    centered_popup_rect(width, 3, area)
}

/// Draw the prompt and put the terminal cursor after the typed text.
pub fn render_prompt_overlay(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let popup = prompt_rect(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", prompt.kind.title()))
        .borders(Borders::ALL)
        .border_style(style::prompt_border_style());
    let inner = block.inner(popup);

    let label = prompt.kind.label();
    let line = Line::from(vec![Span::raw(label), Span::raw(prompt.input.as_str())]);

    // Keep the end of long input in view.
    let typed = label.width() + prompt.input.width();
    let inner_width = usize::from(inner.width);
    let scroll = typed.saturating_sub(inner_width.saturating_sub(1));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(
        Paragraph::new(line).block(block).scroll((0, scroll)),
        popup,
    );

    if inner.width > 0 && inner.height > 0 {
        let col = u16::try_from(typed).unwrap_or(u16::MAX).saturating_sub(scroll);
        let col = col.min(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
