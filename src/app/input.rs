use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::model::{Prompt, PromptKind};
use crate::app::{App, Message, Model};
use crate::editor::Direction;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Repeats arrive as Press on most terminals; Release only on enhanced ones.
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if let Some(prompt) = model.prompt.as_ref() {
            return Self::handle_prompt_key(key, prompt);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            // Commands
            KeyCode::Char('u' | 's') if ctrl => Some(Message::Save),
            KeyCode::Char('n') if ctrl => Some(Message::StartSaveAs),
            KeyCode::Char('v') if ctrl => Some(Message::StartOpen),
            KeyCode::Char('k' | 'c') if ctrl => Some(Message::Exit),

            // Editing
            KeyCode::Char(c) if !ctrl && !alt => Some(Message::EditorInsertChar(c)),
            KeyCode::Tab => Some(Message::EditorInsertChar('\t')),
            KeyCode::Enter => Some(Message::EditorSplitLine),
            KeyCode::Backspace => Some(Message::EditorDeleteBack),
            KeyCode::Delete => Some(Message::EditorDeleteForward),

            // Navigation
            KeyCode::Up => Some(Message::EditorMoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::EditorMoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::EditorMoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::EditorMoveCursor(Direction::Right)),
            KeyCode::Home => Some(Message::EditorMoveCursor(Direction::Home)),
            KeyCode::End => Some(Message::EditorMoveCursor(Direction::End)),

            _ => None,
        }
    }

    fn handle_prompt_key(key: KeyEvent, prompt: &Prompt) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => Some(Message::PromptCancel),
            KeyCode::Char('c') if ctrl => Some(Message::PromptCancel),
            KeyCode::Enter => {
                let input = prompt.input.clone();
                Some(match prompt.kind {
                    PromptKind::SaveAs => Message::SaveAs(input),
                    PromptKind::Open => Message::Open(input),
                    PromptKind::ConfirmExit => Message::ConfirmExit(input),
                })
            }
            KeyCode::Backspace => {
                let mut next = prompt.input.clone();
                next.pop();
                Some(Message::PromptInput(next))
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                let mut next = prompt.input.clone();
                next.push(c);
                Some(Message::PromptInput(next))
            }
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
