//! Interactive terminal screens.
//!
//! Each screen is a synchronous call that owns the terminal until the user
//! finishes, then hands back an outcome value. The terminal is restored on
//! every exit path, including errors and panics unwinding through the guard.

pub mod form;
pub mod picker;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::error::Result;

pub(crate) trait Screen {
    type Outcome;

    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Outcome>;
}

struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        Ok(TerminalGuard {
            terminal: ratatui::try_init()?,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

pub(crate) fn run<S: Screen>(screen: &mut S) -> Result<S::Outcome> {
    let mut guard = TerminalGuard::enter()?;

    loop {
        guard.terminal.draw(|frame| screen.draw(frame))?;
        if let Some(outcome) = screen.handle_key(next_key()?) {
            return Ok(outcome);
        }
    }
}

// key release/repeat events are reported on Windows only; ignore them
fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
