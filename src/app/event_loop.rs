use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::editor::EditorBuffer;

/// How long to wait for input when nothing needs repainting.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Raw-mode, alternate-screen terminal for the lifetime of an editing session.
///
/// The terminal is restored when this is dropped, so early returns through
/// `?` leave the shell usable. Panics are covered by the hook that
/// `ratatui::try_init` installs.
pub(super) struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal: notepadgtx requires an interactive terminal")?;
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        tracing::debug!("terminal session restored");
    }
}

impl App {
    /// Run the editor until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or if reading
    /// events or drawing fails. File errors are shown in the UI instead.
    pub fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::start()?;
        let size = session.terminal.size()?;

        let mut model = Model::new(EditorBuffer::empty(), None, (size.width, size.height));
        if let Some(path) = self.file_path.clone() {
            Self::open_path(&mut model, &path);
        }
        if let Some(notice) = self.notice.take() {
            model.show_toast(ToastLevel::Warning, notice);
        }

        Self::event_loop(&mut session.terminal, &mut model)
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll = if needs_render { Duration::ZERO } else { IDLE_POLL };
            if event::poll(poll)? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while !model.should_quit && event::poll(Duration::ZERO)? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                }
            }

            if model.should_quit {
                tracing::debug!("exit requested");
                break;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }
        }

        Ok(())
    }

    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        tracing::debug!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}
