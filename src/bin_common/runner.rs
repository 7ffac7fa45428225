//! Binary runner utilities
//!
//! Runs the navigator on the real terminal with startup and shutdown
//! logging, restoring the terminal whatever the outcome.

use std::time::Duration;

use menu::{run_app, CrosstermEvents, Navigator, TerminalError, TerminalSession};
use tracing::{error, info};

/// Configuration for running the menu binary
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the binary (for logging)
    pub name: String,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tick_rate_ms: 250,
        }
    }

    /// Set input poll interval
    pub fn with_tick_rate(mut self, millis: u64) -> Self {
        self.tick_rate_ms = millis;
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Run the navigator until the user quits
pub fn run_navigator(config: &RunConfig) -> anyhow::Result<()> {
    info!("========================================");
    info!("Starting {}", config.name);
    info!("========================================");

    let mut session = TerminalSession::start()?;
    let mut navigator = Navigator::new();

    let result = run_app(
        session.terminal_mut(),
        &mut navigator,
        &mut CrosstermEvents,
        config.tick_rate(),
    );

    if let Err(e) = &result {
        error!(error = ?e, "{} event loop failed: {}", config.name, e);
    }

    // Restore before returning so the message lands on the normal screen
    let restored = session.restore();

    info!("========================================");
    info!("{} stopped", config.name);
    info!("  Notifications: {}", navigator.notifications().len());
    info!("========================================");

    finish(result, restored)
}

/// Combine the event loop outcome with the terminal restore outcome.
/// The loop error wins; a failed restore is attached to it as context.
fn finish(
    result: std::result::Result<(), TerminalError>,
    restored: std::result::Result<(), TerminalError>,
) -> anyhow::Result<()> {
    match (result, restored) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(restore)) => Err(restore.into()),
        (Err(e), Ok(())) => Err(e.into()),
        (Err(e), Err(restore)) => {
            error!(error = ?restore, "Terminal restore failed as well: {}", restore);
            Err(anyhow::Error::from(e).context(format!("{restore} after the event loop failed")))
        }
    }
}
