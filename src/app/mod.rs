//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, OpenOutcome, Prompt, PromptKind, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Default)]
pub struct App {
    file_path: Option<PathBuf>,
    notice: Option<String>,
}

impl App {
    /// Create a new application, optionally opening `file_path` at startup.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            notice: None,
        }
    }

    /// Show `notice` as a warning toast when the editor starts.
    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}
