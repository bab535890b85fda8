//! Polled event loop: draw a frame, wait for a key, hand it to the [`App`].
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::{
    app::App,
    input::InputHandler,
    presentation::{terminal::Tui, ui},
};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    input: InputHandler,
    app: App,
}

impl EventLoop {
    pub fn new(app: App) -> Self {
        Self {
            input: InputHandler::new(),
            app,
        }
    }

    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

        while !self.app.should_quit() {
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            if !term_event::poll(frame_interval)? {
                continue;
            }

            if let TermEvent::Key(key) = term_event::read()? {
                self.handle_key(key);
            }
        }

        tracing::debug!("Event loop exiting");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self
            .input
            .handle_key(key, self.app.input_mode(), self.app.state().phase);
        self.app.handle(action);
    }
}
