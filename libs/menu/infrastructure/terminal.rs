//! Terminal session and input source
//!
//! `TerminalSession` switches the terminal into raw mode on the alternate
//! screen and puts it back on `restore` or drop. `EventSource` is the seam
//! the event loop reads keys through.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Failed to set up terminal")]
    Setup(#[source] io::Error),

    #[error("Failed to draw frame")]
    Draw(#[source] io::Error),

    #[error("Failed to read input")]
    Input(#[source] io::Error),

    #[error("Failed to restore terminal")]
    Restore(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, TerminalError>;

/// Source of key presses for the event loop
pub trait EventSource {
    /// Wait up to `timeout` for the next key press
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Reads key presses from the real terminal
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            // Only key presses, not releases or repeats
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Full-screen terminal owned by the UI
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen
    pub fn start() -> Result<Self> {
        enable_raw_mode().map_err(TerminalError::Setup)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(TerminalError::Setup(e));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                Err(TerminalError::Setup(e))
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leave the alternate screen and raw mode
    pub fn restore(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode().map_err(TerminalError::Restore)?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(TerminalError::Restore)?;
        self.terminal.show_cursor().map_err(TerminalError::Restore)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}
