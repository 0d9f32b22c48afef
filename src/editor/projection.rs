use super::EditorBuffer;

/// Pick the first visible row so that `cursor_row` stays on screen.
///
/// Scrolls up just enough when the cursor is above the window and down just
/// enough when it is below; otherwise keeps `top_row`. A zero height is
/// treated as a single row.
pub const fn compute_viewport(cursor_row: usize, top_row: usize, visible_height: usize) -> usize {
    let height = if visible_height == 0 { 1 } else { visible_height };
    if cursor_row < top_row {
        cursor_row
    } else if cursor_row - top_row >= height {
        cursor_row - (height - 1)
    } else {
        top_row
    }
}

/// The visible slice of the buffer for a given terminal geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameProjection {
    /// Exactly `height` rows; rows past the end of the document are empty.
    pub rows: Vec<String>,
    /// Cursor position relative to the projected area, as `(row, column)`.
    pub cursor: (usize, usize),
}

/// Project `height` rows starting at `top_row`, each cut to `width` characters.
///
/// Long lines are truncated rather than wrapped.
pub fn render_frame(
    buffer: &EditorBuffer,
    top_row: usize,
    width: usize,
    height: usize,
) -> FrameProjection {
    let rows = (0..height)
        .map(|i| {
            top_row
                .checked_add(i)
                .and_then(|row| buffer.line_at(row))
                .map_or_else(String::new, |line| line.chars().take(width).collect())
        })
        .collect();
    let cursor = buffer.cursor();
    FrameProjection {
        rows,
        cursor: (cursor.row.saturating_sub(top_row), cursor.col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compute_viewport_keeps_top_when_cursor_visible() {
        assert_eq!(compute_viewport(5, 0, 10), 0);
        assert_eq!(compute_viewport(9, 0, 10), 0);
    }

    #[test]
    fn test_compute_viewport_scrolls_up_to_cursor() {
        assert_eq!(compute_viewport(3, 8, 10), 3);
    }

    #[test]
    fn test_compute_viewport_scrolls_down_to_reveal_cursor() {
        assert_eq!(compute_viewport(10, 0, 10), 1);
        assert_eq!(compute_viewport(42, 5, 10), 33);
    }

    #[test]
    fn test_compute_viewport_is_total_near_usize_max() {
        assert_eq!(compute_viewport(5, usize::MAX - 1, 10), 5);
        assert_eq!(compute_viewport(usize::MAX, usize::MAX - 1, 10), usize::MAX - 1);
        assert_eq!(compute_viewport(usize::MAX, 0, usize::MAX), 1);
    }

    #[test]
    fn test_render_frame_far_past_end_is_blank() {
        let buf = EditorBuffer::from_text("only");
        let frame = render_frame(&buf, usize::MAX, 10, 3);
        assert_eq!(frame.rows, vec![String::new(); 3]);
    }

    #[test]
    fn test_compute_viewport_zero_height_follows_cursor() {
        assert_eq!(compute_viewport(7, 0, 0), 7);
    }

    #[test]
    fn test_render_frame_pads_with_blank_rows() {
        let buf = EditorBuffer::from_text("one\ntwo");
        let frame = render_frame(&buf, 0, 80, 4);
        assert_eq!(frame.rows, vec!["one", "two", "", ""]);
        assert_eq!(frame.cursor, (0, 0));
    }

    #[test]
    fn test_render_frame_truncates_long_lines() {
        let buf = EditorBuffer::from_text("abcdefgh\nxy");
        let frame = render_frame(&buf, 0, 5, 2);
        assert_eq!(frame.rows, vec!["abcde", "xy"]);
    }

    #[test]
    fn test_render_frame_truncates_by_character() {
        let buf = EditorBuffer::from_text("ééééé");
        let frame = render_frame(&buf, 0, 3, 1);
        assert_eq!(frame.rows, vec!["ééé"]);
    }

    #[test]
    fn test_render_frame_offsets_cursor_by_top_row() {
        let mut buf = EditorBuffer::from_text("a\nb\nc\nd\ne");
        buf.move_to(4, 1);
        let top = compute_viewport(buf.cursor().row, 0, 2);
        assert_eq!(top, 3);
        let frame = render_frame(&buf, top, 10, 2);
        assert_eq!(frame.rows, vec!["d", "e"]);
        assert_eq!(frame.cursor, (1, 1));
    }

    #[test]
    fn test_render_frame_reports_cursor_past_width_unchanged() {
        let mut buf = EditorBuffer::from_text("abcdefgh");
        buf.move_to(0, 8);
        let frame = render_frame(&buf, 0, 4, 1);
        assert_eq!(frame.cursor, (0, 8));
    }

    proptest! {
        #[test]
        fn prop_viewport_contains_cursor(
            cursor_row in 0usize..10_000,
            top_row in 0usize..10_000,
            height in 1usize..200,
        ) {
            let top = compute_viewport(cursor_row, top_row, height);
            prop_assert!(top <= cursor_row);
            prop_assert!(cursor_row < top + height);
        }

        #[test]
        fn prop_frame_has_requested_shape(
            text in "[a-z\n]{0,64}",
            top_row in 0usize..20,
            width in 0usize..12,
            height in 0usize..12,
        ) {
            let buf = EditorBuffer::from_text(&text);
            let frame = render_frame(&buf, top_row, width, height);
            prop_assert_eq!(frame.rows.len(), height);
            prop_assert!(frame.rows.iter().all(|row| row.chars().count() <= width));
        }
    }
}
