use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::editor::EditorBuffer;
use crate::files::{self, FileError};
use crate::ui::viewport::Viewport;

/// How long a transient message stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which question a prompt is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Open,
    ConfirmExit,
}

impl PromptKind {
    /// Text shown before the user's input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaveAs => "Save as: ",
            Self::Open => "Open file: ",
            Self::ConfirmExit => "Unsaved changes. Exit anyway? (y/n) ",
        }
    }

    /// Title of the prompt popup.
    pub const fn title(self) -> &'static str {
        match self {
            Self::SaveAs => "Save As",
            Self::Open => "Open",
            Self::ConfirmExit => "Confirm",
        }
    }
}

/// A modal single-line input. While present it captures every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// What happened when a path was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The file existed and its text was loaded.
    Loaded,
    /// The file did not exist; an empty buffer is now bound to the path.
    Created,
}

/// The complete editing session state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The document being edited
    pub buffer: EditorBuffer,
    /// Path the buffer is bound to (`None` for untitled buffers)
    pub file_path: Option<PathBuf>,
    /// Editor area geometry and first visible row
    pub viewport: Viewport,
    /// Active prompt, if any
    pub prompt: Option<Prompt>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("buffer", &self.buffer)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model for `buffer` in a terminal of `terminal_size` (columns, rows).
    pub fn new(buffer: EditorBuffer, file_path: Option<PathBuf>, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer,
            file_path,
            viewport: Viewport::new(terminal_size.1.saturating_sub(crate::ui::FOOTER_ROWS)),
            prompt: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Whether there are unsaved changes.
    pub const fn is_modified(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// File name for display, or `[Untitled]`.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(
                || "[Untitled]".to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Replace the buffer with the contents of `path`.
    ///
    /// A missing file is not an error: the buffer becomes empty and is bound
    /// to `path` so the first save creates it.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Io`] if the file exists but cannot be read; the
    /// model is left unchanged.
    pub fn open_path(&mut self, path: &Path) -> Result<OpenOutcome, FileError> {
        let (buffer, outcome) = match files::read_whole_file(path) {
            Ok(text) => (EditorBuffer::from_text(&text), OpenOutcome::Loaded),
            Err(FileError::NotFound(_)) => (EditorBuffer::empty(), OpenOutcome::Created),
            Err(err) => return Err(err),
        };
        self.buffer = buffer;
        self.file_path = Some(path.to_path_buf());
        self.viewport.reset();
        Ok(outcome)
    }

    /// Write the buffer to `path` and bind the buffer to it.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Io`] if the write fails; the path binding and the
    /// modified flag are left unchanged.
    pub fn save_to(&mut self, path: &Path) -> Result<(), FileError> {
        files::write_whole_file(path, &self.buffer.text())?;
        self.file_path = Some(path.to_path_buf());
        self.buffer.mark_clean();
        Ok(())
    }

    pub(super) fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(EditorBuffer::empty(), None, (80, 24))
    }
}
