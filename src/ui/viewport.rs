//! Viewport management for the editor area.
//!
//! The [`Viewport`] struct tracks the height of the editor area and the first
//! visible row. The row is never set directly: it only follows the cursor.

use crate::editor::compute_viewport;

/// The visible window of the document.
///
/// # Example
///
/// ```
/// use notepadgtx::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10);
/// vp.follow(25);
/// assert_eq!(vp.top_row(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    top_row: usize,
}

impl Viewport {
    /// Create a viewport `height` rows tall, starting at the top.
    pub const fn new(height: u16) -> Self {
        Self {
            height,
            top_row: 0,
        }
    }

    /// Get the first visible row.
    pub const fn top_row(&self) -> usize {
        self.top_row
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Scroll just enough to keep `cursor_row` visible.
    pub const fn follow(&mut self, cursor_row: usize) {
        self.top_row = compute_viewport(cursor_row, self.top_row, self.height as usize);
    }

    /// Change the number of visible rows.
    pub const fn resize(&mut self, height: u16) {
        self.height = height;
    }

    /// Go back to the top of the document (e.g., after loading a file).
    pub const fn reset(&mut self) {
        self.top_row = 0;
    }
}
