//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Editor area size and first visible row
//! - [`style`]: Colors for the status, shortcut and toast bars

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use overlays::prompt_rect;
pub use render::{render, split_screen};
pub use status::status_text;

/// Rows below the editor area that are always shown (status and shortcuts).
pub const FOOTER_ROWS: u16 = 2;

/// Contents of the shortcut bar.
pub const SHORTCUTS: &str = "Ctrl+U:Save | Ctrl+N:Save As | Ctrl+V:Open | Ctrl+K:Exit";
