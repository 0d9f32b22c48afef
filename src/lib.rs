// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # notepadgtx
//!
//! A small plain-text editor for the terminal.
//!
//! The editor keeps the document as a list of lines with a single cursor,
//! saves and opens whole files, and draws a status bar, a shortcut bar and
//! transient messages around the text.
//!
//! ## Architecture
//!
//! notepadgtx uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Line buffer, cursor and viewport projection
//! - [`files`]: Whole-file reads and writes
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Launcher flags, presentation mode and saved defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod files;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, Direction, EditorBuffer};
    pub use crate::files::FileError;
    pub use crate::ui::viewport::Viewport;
}
