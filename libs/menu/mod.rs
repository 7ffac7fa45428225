//! DAETRADER terminal menu
//!
//! Navigation menus for the trading tool, rendered full-screen with
//! ratatui.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::{run_app, Command, Navigator};
pub use domain::{ConfigEntry, MainEntry, MenuEntry, Screen};
pub use infrastructure::{
    file_subscriber, init_tracing_to_file, ConfigError, CrosstermEvents, EventSource, ListView,
    MenuConfig, TerminalError, TerminalSession,
};
