//! Line buffer and cursor engine.
//!
//! Holds the document as a sequence of lines with a cursor and a modified
//! flag, plus the pure viewport and frame projection used by the renderer.
//! Nothing in here fails or touches the terminal.

mod buffer;
mod projection;

pub use buffer::{Cursor, Direction, EditorBuffer};
pub use projection::{FrameProjection, compute_viewport, render_frame};
