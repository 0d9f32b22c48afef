use crate::app::Model;
use crate::app::model::PromptKind;
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editor
    /// Insert a character at the cursor
    EditorInsertChar(char),
    /// Delete character before cursor (Backspace)
    EditorDeleteBack,
    /// Delete character at cursor (Delete)
    EditorDeleteForward,
    /// Split line at cursor (Enter)
    EditorSplitLine,
    /// Move cursor in a direction
    EditorMoveCursor(Direction),

    // Files
    /// Save to the bound path, or ask for one if untitled
    Save,
    /// Ask for a path to save to
    StartSaveAs,
    /// Ask for a path to open
    StartOpen,
    /// Save to the submitted path
    SaveAs(String),
    /// Open the submitted path
    Open(String),

    // Prompt
    /// Replace the prompt input
    PromptInput(String),
    /// Dismiss the prompt without acting
    PromptCancel,

    // Application
    /// Quit, asking first if there are unsaved changes
    Exit,
    /// Answer to the unsaved-changes question
    ConfirmExit(String),

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// File I/O for `Save`, `SaveAs` and `Open` runs afterwards in
/// `App::handle_message_side_effects`.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Editor
        Message::EditorInsertChar(ch) => {
            model.buffer.insert_char(ch);
            editor_ensure_cursor_visible(&mut model);
        }
        Message::EditorDeleteBack => {
            model.buffer.delete_back();
            editor_ensure_cursor_visible(&mut model);
        }
        Message::EditorDeleteForward => {
            model.buffer.delete_forward();
        }
        Message::EditorSplitLine => {
            model.buffer.split_line();
            editor_ensure_cursor_visible(&mut model);
        }
        Message::EditorMoveCursor(dir) => {
            model.buffer.move_cursor(dir);
            editor_ensure_cursor_visible(&mut model);
        }

        // Files
        Message::Save => {
            if model.file_path.is_none() {
                model.open_prompt(PromptKind::SaveAs);
            }
        }
        Message::StartSaveAs => model.open_prompt(PromptKind::SaveAs),
        Message::StartOpen => model.open_prompt(PromptKind::Open),
        Message::SaveAs(_) | Message::Open(_) | Message::PromptCancel => {
            model.prompt = None;
        }

        // Prompt
        Message::PromptInput(input) => {
            if let Some(prompt) = &mut model.prompt {
                prompt.input = input;
            }
        }

        // Application
        Message::Exit => {
            if model.is_modified() {
                model.open_prompt(PromptKind::ConfirmExit);
            } else {
                model.should_quit = true;
            }
        }
        Message::ConfirmExit(answer) => {
            model.prompt = None;
            if is_affirmative(&answer) {
                model.should_quit = true;
            }
        }

        // Window
        Message::Resize(_width, height) => {
            model
                .viewport
                .resize(height.saturating_sub(crate::ui::FOOTER_ROWS));
            editor_ensure_cursor_visible(&mut model);
        }
        Message::Redraw => {}
    }
    model
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim_start().starts_with(['y', 'Y'])
}

/// Ensure the editor cursor line is visible in the viewport.
fn editor_ensure_cursor_visible(model: &mut Model) {
    let cursor_row = model.buffer.cursor().row;
    model.viewport.follow(cursor_row);
}
