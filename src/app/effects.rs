use std::path::Path;

use crate::app::model::OpenOutcome;
use crate::app::{App, Message, Model, ToastLevel};
use crate::files::{self, FileError};

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => {
                if let Some(path) = model.file_path.clone() {
                    Self::save_to_path(model, &path);
                }
            }
            Message::SaveAs(input) => match files::resolve_path(input) {
                Ok(path) => Self::save_to_path(model, &path),
                Err(FileError::InvalidPath) => {
                    model.show_toast(ToastLevel::Info, "Save cancelled");
                }
                Err(err) => {
                    model.show_toast(ToastLevel::Error, format!("Error saving file: {err}"));
                }
            },
            Message::Open(input) => match files::resolve_path(input) {
                Ok(path) => Self::open_path(model, &path),
                Err(FileError::InvalidPath) => {
                    model.show_toast(ToastLevel::Info, "Open cancelled");
                }
                Err(err) => {
                    model.show_toast(ToastLevel::Error, format!("Error opening file: {err}"));
                }
            },
            _ => {}
        }
    }

    fn save_to_path(model: &mut Model, path: &Path) {
        match model.save_to(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), lines = model.buffer.line_count(), "saved");
                model.show_toast(ToastLevel::Info, format!("Saved: {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(%err, "save failed");
                model.show_toast(ToastLevel::Error, format!("Error saving file: {err}"));
            }
        }
    }

    pub(super) fn open_path(model: &mut Model, path: &Path) {
        match model.open_path(path) {
            Ok(OpenOutcome::Loaded) => {
                tracing::info!(path = %path.display(), lines = model.buffer.line_count(), "opened");
                model.show_toast(ToastLevel::Info, format!("Opened: {}", path.display()));
            }
            Ok(OpenOutcome::Created) => {
                tracing::info!(path = %path.display(), "new file");
                model.show_toast(ToastLevel::Warning, format!("New file: {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(%err, "open failed");
                model.show_toast(ToastLevel::Error, format!("Error opening file: {err}"));
            }
        }
    }
}
