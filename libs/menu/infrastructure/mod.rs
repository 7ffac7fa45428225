//! Infrastructure Layer
//!
//! Terminal plumbing, the list widget, configuration and logging.

pub mod config;
pub mod list;
pub mod logging;
pub mod terminal;

pub use config::{ConfigError, MenuConfig};
pub use list::{FilterState, ListCommand, ListView};
pub use logging::{file_subscriber, init_tracing_to_file};
pub use terminal::{CrosstermEvents, EventSource, TerminalError, TerminalSession};
