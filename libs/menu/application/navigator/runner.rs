//! Event loop driving the navigator

use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tracing::info;

use super::app::{Command, Navigator};
use super::ui;
use crate::infrastructure::terminal::{EventSource, Result, TerminalError};

/// Draw, wait for a key, update; until the navigator asks to quit
pub fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    navigator: &mut Navigator,
    events: &mut E,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, navigator))
            .map_err(TerminalError::Draw)?;

        let Some(key) = events.next_key(tick_rate).map_err(TerminalError::Input)? else {
            continue;
        };

        if navigator.update(key) == Command::Quit {
            info!("Quit requested on {}", navigator.display_path());
            return Ok(());
        }
    }
}
