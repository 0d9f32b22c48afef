/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based column, counted in characters (may equal the line length).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// A text buffer stored as an ordered sequence of lines.
///
/// Lines never contain `\n`; separators are implied by the sequence and
/// restored by [`EditorBuffer::text`]. The buffer always holds at least one
/// line, and the cursor always points at a valid position.
#[derive(Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<String>,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, splitting on `\n`.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(ToOwned::to_owned).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create an empty buffer (a single empty line).
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer. Never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the content of a line.
    pub fn line_at(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of a line in characters.
    pub fn line_len(&self, row: usize) -> usize {
        self.line_at(row).map_or(0, |line| line.chars().count())
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full text content of the buffer, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Insert a character at the cursor position.
    ///
    /// A `'\n'` splits the line instead of being stored.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.split_line();
            return;
        }
        let byte = self.cursor_byte_idx();
        let row = self.cursor.row;
        self.lines[row].insert(byte, ch);
        self.cursor.col += 1;
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let byte = self.cursor_byte_idx();
        let row = self.cursor.row;
        let rest = self.lines[row].split_off(byte);
        self.lines.insert(row + 1, rest);
        self.cursor = Cursor::at(row + 1, 0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 the current line is joined onto the previous one.
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let byte = byte_offset(line, col - 1);
            line.remove(byte);
            self.cursor.col = col - 1;
        } else if row > 0 {
            // Join with previous line
            let current = self.lines.remove(row);
            let join_col = self.line_len(row - 1);
            self.lines[row - 1].push_str(&current);
            self.cursor = Cursor::at(row - 1, join_col);
        } else {
            return false;
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// At the end of a line the next line is joined onto the current one.
    /// The cursor does not move. Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col < self.line_len(row) {
            let line = &mut self.lines[row];
            let byte = byte_offset(line, col);
            line.remove(byte);
        } else if row + 1 < self.line_count() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
        } else {
            return false;
        }
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction.
    ///
    /// Horizontal moves stay on the current line. Vertical moves clamp the
    /// column to the length of the destination line, and the clamped column
    /// is not remembered. Moves past the document edge are no-ops.
    pub fn move_cursor(&mut self, direction: Direction) {
        let Cursor { row, col } = self.cursor;
        match direction {
            Direction::Left => {
                self.cursor.col = col.saturating_sub(1);
            }
            Direction::Right => {
                if col < self.line_len(row) {
                    self.cursor.col = col + 1;
                }
            }
            Direction::Up => {
                if row > 0 {
                    self.cursor = Cursor::at(row - 1, col.min(self.line_len(row - 1)));
                }
            }
            Direction::Down => {
                if row + 1 < self.line_count() {
                    self.cursor = Cursor::at(row + 1, col.min(self.line_len(row + 1)));
                }
            }
            Direction::Home => self.cursor.col = 0,
            Direction::End => self.cursor.col = self.line_len(row),
        }
    }

    /// Move cursor to a specific line and column, clamped into the document.
    pub fn move_to(&mut self, row: usize, col: usize) {
        let row = row.min(self.line_count() - 1);
        self.cursor = Cursor::at(row, col.min(self.line_len(row)));
    }

    /// Byte index of the cursor within the current line.
    fn cursor_byte_idx(&self) -> usize {
        byte_offset(&self.lines[self.cursor.row], self.cursor.col)
    }
}

/// Convert a character column into a byte offset, saturating at the line end.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("lines", &format_args!("{} lines", self.lines.len()))
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
